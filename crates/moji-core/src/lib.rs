//! # Moji Core
//!
//! The core engine for chat trigger substitution: a registry of emoji and
//! soundoji resources loaded from the filesystem, and a rewriter that
//! swaps matching chat tokens for icon markup and audio cues.
//!
//! ## Architecture
//!
//! Everything flows through two phases:
//!
//! ```text
//! session start                          per inbound message
//! ┌──────────┐   ┌───────────────┐       ┌─────────────────┐
//! │ scan      │──▶│ TriggerLoader │──┐    │ MessageRewriter │──▶ new text
//! │ (flatten) │   │ (decode +     │  │    │ (tokenize,      │──▶ audio
//! └──────────┘   │  register)    │  ▼    │  match, mark)   │    triggers
//!                └───────────────┘ TriggerRegistry ─────────┘
//!                                  (immutable)
//! ```
//!
//! - **Scanning** flattens each resource folder into a sorted, bounded
//!   file list ([`scan::flatten`]).
//! - **Loading** decodes each file and registers it with the host
//!   capabilities, collecting per-file failures into a [`LoadOutcome`]
//!   instead of aborting ([`TriggerLoader`]).
//! - **The registry** is built once from those outcomes and is immutable
//!   for the rest of the session ([`TriggerRegistry`]).
//! - **Rewriting** runs per message against the registry and returns the
//!   edited text plus audio-trigger requests ([`MessageRewriter`]).
//!
//! The host supplies the outward-facing pieces as trait objects — icon
//! rendering, audio playback, and the live volume setting (see
//! [`capability`]).
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use moji_core::{MessageRewriter, TriggerLoader, TriggerRegistry};
//!
//! let loader = TriggerLoader::new(icons.clone(), audio);
//! let emojis = loader.load_emojis(&emoji_dir);
//! let soundojis = loader.load_soundojis(&soundoji_dir);
//! // Surface emojis.failures() / soundojis.failures() as diagnostics.
//!
//! let registry = Arc::new(TriggerRegistry::build(emojis, soundojis));
//! let rewriter = MessageRewriter::new(registry.clone(), icons, volume);
//!
//! if let Some(result) = rewriter.rewrite("monkaw pipe", true) {
//!     for trigger in &result.audio {
//!         registry.play_soundoji(&trigger.key, trigger.gain_db);
//!     }
//!     deliver(result.message);
//! }
//! ```

pub mod capability;
pub mod error;
pub mod gain;
pub mod loader;
pub mod outcome;
pub mod registry;
pub mod resource;
pub mod rewrite;
pub mod scan;
pub mod text;

pub use capability::{
    AudioCapability, AudioClip, DEFAULT_VOLUME, IconCapability, IconHandle, PlaybackHandle,
    VolumeControl,
};
pub use error::{LoadError, LoadFailure};
pub use gain::{NOISE_FLOOR_DB, volume_to_gain};
pub use loader::TriggerLoader;
pub use outcome::LoadOutcome;
pub use registry::TriggerRegistry;
pub use resource::{Emoji, Soundoji, TriggerKey};
pub use rewrite::{AudioTrigger, MessageRewriter, RewriteResult};
pub use scan::MAX_SCAN_DEPTH;

/// Prelude for common imports.
pub mod prelude {
    pub use super::capability::{
        AudioCapability, IconCapability, PlaybackHandle, VolumeControl,
    };
    pub use super::{
        AudioTrigger, LoadOutcome, MessageRewriter, RewriteResult, TriggerKey, TriggerLoader,
        TriggerRegistry,
    };
}
