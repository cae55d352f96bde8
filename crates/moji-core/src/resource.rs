//! Trigger resource records and key normalization.

use std::fmt;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::capability::{IconHandle, PlaybackHandle};
use crate::error::LoadError;

/// Normalized identifier matching a chat token to a resource.
///
/// Keys are lower-cased on construction. Loading and lookup both go
/// through this type, so the two sides can never normalize differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TriggerKey(String);

impl TriggerKey {
    /// Creates a key from raw trigger text.
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().to_lowercase())
    }

    /// Derives a key from a resource file name.
    ///
    /// The extension is informational only: the text before the last `.`
    /// becomes the key. A name without a `.` is rejected, and so is a name
    /// with nothing before it (like `.png`) — the empty key must never
    /// enter a registry, because tokens that strip down to nothing are
    /// defined to match nothing.
    pub fn from_file_name(path: &Path) -> Result<Self, LoadError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or(LoadError::InvalidFileName)?;

        match name.rfind('.') {
            None | Some(0) => Err(LoadError::InvalidFileName),
            Some(dot) => Ok(Self::new(&name[..dot])),
        }
    }

    /// The normalized key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TriggerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image trigger: a chat token rendered as an inline icon.
#[derive(Debug, Clone)]
pub struct Emoji {
    /// Normalized trigger key.
    pub key: TriggerKey,
    /// Handle obtained from the icon capability at load time.
    pub icon: IconHandle,
    /// File the image was loaded from.
    pub source: PathBuf,
}

/// An audio trigger: a chat token that plays a clip and gets underlined.
///
/// The playback handle is opened once at load time and reused for every
/// match. Each soundoji guards its handle with its own mutex, so
/// concurrent matches of the same key restart the clip instead of
/// corrupting its playback position — and triggers of different keys never
/// contend with each other.
pub struct Soundoji {
    /// Normalized trigger key.
    pub key: TriggerKey,
    /// File the clip was loaded from.
    pub source: PathBuf,
    playback: Mutex<Box<dyn PlaybackHandle>>,
}

impl Soundoji {
    /// Creates a soundoji wrapping an opened playback handle.
    pub fn new(
        key: TriggerKey,
        source: impl Into<PathBuf>,
        playback: Box<dyn PlaybackHandle>,
    ) -> Self {
        Self {
            key,
            source: source.into(),
            playback: Mutex::new(playback),
        }
    }

    /// Restarts the clip from the beginning at the given gain.
    ///
    /// The rewind, gain change, and start run under the resource's mutex:
    /// a trigger arriving while the clip is playing truncates and restarts
    /// it rather than overlapping.
    pub fn play(&self, gain_db: f32) {
        let mut handle = self.playback.lock();
        handle.reset_position();
        handle.set_gain(gain_db);
        handle.start();
    }
}

impl fmt::Debug for Soundoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Soundoji")
            .field("key", &self.key)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_key_lowercases() {
        assert_eq!(TriggerKey::new("MonkaW").as_str(), "monkaw");
        assert_eq!(TriggerKey::new("pipe"), TriggerKey::new("PIPE"));
    }

    #[test]
    fn test_key_from_file_name_strips_extension() {
        let key = TriggerKey::from_file_name(Path::new("emojis/Pipe.PNG")).unwrap();
        assert_eq!(key.as_str(), "pipe");
    }

    #[test]
    fn test_key_uses_last_dot() {
        let key = TriggerKey::from_file_name(Path::new("boop.old.wav")).unwrap();
        assert_eq!(key.as_str(), "boop.old");
    }

    #[test]
    fn test_key_rejects_missing_extension() {
        let err = TriggerKey::from_file_name(Path::new("noext")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileName));
    }

    #[test]
    fn test_key_rejects_empty_stem() {
        let err = TriggerKey::from_file_name(Path::new("sounds/.wav")).unwrap_err();
        assert!(matches!(err, LoadError::InvalidFileName));
    }

    struct RecordingHandle {
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl PlaybackHandle for RecordingHandle {
        fn reset_position(&mut self) {
            self.log.lock().push("reset");
        }

        fn set_gain(&mut self, _gain_db: f32) {
            self.log.lock().push("gain");
        }

        fn start(&mut self) {
            self.log.lock().push("start");
        }
    }

    fn recording_soundoji() -> (Soundoji, Arc<Mutex<Vec<&'static str>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let handle = RecordingHandle {
            log: Arc::clone(&log),
        };
        let soundoji = Soundoji::new(TriggerKey::new("boop"), "boop.wav", Box::new(handle));
        (soundoji, log)
    }

    #[test]
    fn test_play_sequences_reset_gain_start() {
        let (soundoji, log) = recording_soundoji();
        soundoji.play(-3.0);
        assert_eq!(*log.lock(), vec!["reset", "gain", "start"]);
    }

    #[test]
    fn test_concurrent_plays_do_not_interleave() {
        let (soundoji, log) = recording_soundoji();
        let soundoji = Arc::new(soundoji);

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let soundoji = Arc::clone(&soundoji);
                std::thread::spawn(move || soundoji.play(-6.0))
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }

        // Every restart-and-play sequence must appear whole; the per-resource
        // mutex forbids interleaving.
        let log = log.lock();
        assert_eq!(log.len(), 24);
        for sequence in log.chunks(3) {
            assert_eq!(sequence, ["reset", "gain", "start"]);
        }
    }
}
