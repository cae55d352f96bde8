//! Capability seams to the host's icon, audio, and settings subsystems.
//!
//! The engine never talks to a renderer or an audio device directly.
//! The host hands in trait objects for the capabilities it provides, and
//! the loader and rewriter work purely in terms of the opaque handles
//! those capabilities return:
//!
//! - [`IconCapability`] turns decoded images into renderable icon handles.
//! - [`AudioCapability`] opens decoded clips and yields a reusable
//!   [`PlaybackHandle`] per clip.
//! - [`VolumeControl`] exposes the live volume setting, read on every
//!   audio trigger rather than cached.
//!
//! Test code (and any headless host) can satisfy all of these with a few
//! lines of in-memory fakes.

use image::RgbaImage;

/// Opaque handle to an icon registered with the host's icon renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u32);

/// A decoded, ready-to-play audio clip in interleaved PCM.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioClip {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Samples per second.
    pub sample_rate: u32,
    /// Interleaved samples, one value per channel per frame.
    pub samples: Vec<f32>,
}

impl AudioClip {
    /// Clip length in frames (samples per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.samples.len() / self.channels as usize
        }
    }

    /// True when the clip holds no audio at all.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Icon-rendering capability provided by the host.
pub trait IconCapability: Send + Sync {
    /// Registers a decoded image with the renderer, returning an opaque
    /// handle that stays valid for the rest of the session.
    fn register_icon(&self, image: &RgbaImage) -> IconHandle;

    /// Resolves a handle to the renderable icon index used in message
    /// markup (`<img=N>`).
    fn icon_index(&self, handle: IconHandle) -> u32;
}

/// Audio playback capability provided by the host.
pub trait AudioCapability: Send + Sync {
    /// Opens a decoded clip for playback.
    ///
    /// The returned handle is opened once per resource and reused for
    /// every subsequent trigger; the clip is never re-decoded.
    fn open(&self, clip: AudioClip) -> Box<dyn PlaybackHandle>;
}

/// A host-owned playback handle for one opened clip.
///
/// Handles are mutated in place when a soundoji fires. Callers serialize
/// the reset → set-gain → start sequence per handle (see
/// [`Soundoji::play`](crate::resource::Soundoji::play)); implementations
/// need not be re-entrant.
pub trait PlaybackHandle: Send {
    /// Rewinds playback to the start of the clip, even mid-play.
    fn reset_position(&mut self);

    /// Sets the playback gain in decibels.
    fn set_gain(&mut self, gain_db: f32);

    /// Starts (or restarts) playback from the current position.
    fn start(&mut self);
}

/// Default soundoji volume used when the host provides no setting.
pub const DEFAULT_VOLUME: u32 = 70;

/// Read access to the live volume setting.
///
/// Consulted on every audio trigger; implementations must return the
/// current value rather than a snapshot taken at session start.
pub trait VolumeControl: Send + Sync {
    /// The linear volume setting in `[0, 100]`.
    fn current_volume(&self) -> u32 {
        DEFAULT_VOLUME
    }
}
