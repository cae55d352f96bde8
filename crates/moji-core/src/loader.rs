//! Batch loading of trigger resources from the filesystem.
//!
//! Loading is deliberately forgiving: one malformed file never takes down
//! the batch. Every file under a resource root either becomes a resource
//! or a recorded [`LoadFailure`], and the batch returns whatever it
//! managed to load. The only fatal condition — fatal to that one batch
//! call, nothing more — is the root path not being a directory.
//!
//! Decoded images and clips are handed straight to the host capabilities;
//! the loader keeps handles, never pixel or sample data.

use std::path::Path;
use std::sync::Arc;

use rodio::Source;
use tracing::{debug, error};

use crate::capability::{AudioCapability, AudioClip, IconCapability};
use crate::error::{LoadError, LoadFailure};
use crate::outcome::LoadOutcome;
use crate::resource::{Emoji, Soundoji, TriggerKey};
use crate::scan::{self, MAX_SCAN_DEPTH};

/// Loads emoji and soundoji resources through the host capabilities.
pub struct TriggerLoader {
    icons: Arc<dyn IconCapability>,
    audio: Arc<dyn AudioCapability>,
    max_depth: usize,
}

impl TriggerLoader {
    /// Creates a loader over the given capabilities with the default scan
    /// depth.
    pub fn new(icons: Arc<dyn IconCapability>, audio: Arc<dyn AudioCapability>) -> Self {
        Self {
            icons,
            audio,
            max_depth: MAX_SCAN_DEPTH,
        }
    }

    /// Overrides the maximum directory depth scanned below a resource root.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Loads every emoji image under `folder`, recursively.
    pub fn load_emojis(&self, folder: &Path) -> LoadOutcome<Emoji> {
        self.load_batch(folder, |path| self.load_emoji(path))
    }

    /// Loads every soundoji clip under `folder`, recursively.
    pub fn load_soundojis(&self, folder: &Path) -> LoadOutcome<Soundoji> {
        self.load_batch(folder, |path| self.load_soundoji(path))
    }

    fn load_batch<T>(
        &self,
        folder: &Path,
        load: impl Fn(&Path) -> Result<T, LoadError>,
    ) -> LoadOutcome<T> {
        if !folder.is_dir() {
            return LoadOutcome::Failure(vec![LoadFailure::new(
                folder,
                LoadError::RootNotADirectory,
            )]);
        }

        let mut items = Vec::new();
        let mut failures = Vec::new();

        for path in scan::flatten(folder, self.max_depth) {
            match load(&path) {
                Ok(item) => items.push(item),
                Err(err) => {
                    error!(
                        path = %path.display(),
                        error = %err,
                        "failed to load trigger resource"
                    );
                    failures.push(LoadFailure::new(path, err));
                }
            }
        }

        LoadOutcome::from_parts(items, failures)
    }

    fn load_emoji(&self, path: &Path) -> Result<Emoji, LoadError> {
        let key = TriggerKey::from_file_name(path)?;
        let bytes = std::fs::read(path)?;

        let image = image::load_from_memory(&bytes)
            .map_err(|err| LoadError::UnsupportedFormat(err.to_string()))?
            .to_rgba8();
        if image.width() == 0 || image.height() == 0 {
            return Err(LoadError::UnsupportedFormat("image has no pixels".into()));
        }

        let icon = self.icons.register_icon(&image);
        debug!(key = %key, path = %path.display(), "registered emoji");
        Ok(Emoji {
            key,
            icon,
            source: path.to_path_buf(),
        })
    }

    fn load_soundoji(&self, path: &Path) -> Result<Soundoji, LoadError> {
        let key = TriggerKey::from_file_name(path)?;
        let bytes = std::fs::read(path)?;
        let clip = decode_clip(bytes)?;

        let playback = self.audio.open(clip);
        debug!(key = %key, path = %path.display(), "opened soundoji clip");
        Ok(Soundoji::new(key, path, playback))
    }
}

/// Decodes raw audio bytes into an interleaved PCM clip.
fn decode_clip(bytes: Vec<u8>) -> Result<AudioClip, LoadError> {
    let decoder = rodio::Decoder::new(std::io::Cursor::new(bytes))
        .map_err(|err| LoadError::UnsupportedFormat(err.to_string()))?;

    let channels = decoder.channels();
    let sample_rate = decoder.sample_rate();
    let samples: Vec<f32> = decoder.collect();
    if samples.is_empty() {
        return Err(LoadError::UnsupportedFormat("clip contains no samples".into()));
    }

    Ok(AudioClip {
        channels,
        sample_rate,
        samples,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{IconHandle, PlaybackHandle};
    use std::fs;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct FakeIcons {
        next: AtomicU32,
    }

    impl IconCapability for FakeIcons {
        fn register_icon(&self, _image: &image::RgbaImage) -> IconHandle {
            IconHandle(self.next.fetch_add(1, Ordering::SeqCst))
        }

        fn icon_index(&self, handle: IconHandle) -> u32 {
            handle.0
        }
    }

    struct NullHandle;

    impl PlaybackHandle for NullHandle {
        fn reset_position(&mut self) {}
        fn set_gain(&mut self, _gain_db: f32) {}
        fn start(&mut self) {}
    }

    #[derive(Default)]
    struct FakeAudio;

    impl AudioCapability for FakeAudio {
        fn open(&self, _clip: AudioClip) -> Box<dyn PlaybackHandle> {
            Box::new(NullHandle)
        }
    }

    fn loader() -> TriggerLoader {
        TriggerLoader::new(Arc::new(FakeIcons::default()), Arc::new(FakeAudio))
    }

    fn png_bytes() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
        let mut cursor = std::io::Cursor::new(Vec::new());
        img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    // Minimal mono 16-bit PCM WAV container around the given samples.
    fn wav_bytes(samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
        bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
        bytes.extend_from_slice(&44_100u32.to_le_bytes());
        bytes.extend_from_slice(&(44_100u32 * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes()); // block align
        bytes.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_emoji_batch_with_one_bad_name_is_partial() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("monkaw.png"), png_bytes()).unwrap();
        fs::write(dir.path().join("pipe.png"), png_bytes()).unwrap();
        fs::write(dir.path().join("noext"), png_bytes()).unwrap();

        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_partial());
        assert_eq!(outcome.items().len(), 2);
        assert_eq!(outcome.failures().len(), 1);

        let failure = &outcome.failures()[0];
        assert!(failure.path.ends_with("noext"));
        assert!(matches!(failure.error, LoadError::InvalidFileName));
    }

    #[test]
    fn test_emoji_keys_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("MonkaW.PNG"), png_bytes()).unwrap();

        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_success());
        assert_eq!(outcome.items()[0].key, TriggerKey::new("monkaw"));
    }

    #[test]
    fn test_emoji_garbage_bytes_are_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.png"), b"definitely not a png").unwrap();

        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_partial());
        assert!(outcome.items().is_empty());
        assert!(matches!(
            outcome.failures()[0].error,
            LoadError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_empty_folder_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_success());
        assert!(outcome.items().is_empty());
    }

    #[test]
    fn test_missing_root_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = loader().load_emojis(&dir.path().join("gone"));
        assert!(outcome.is_failure());
        assert!(matches!(
            outcome.failures()[0].error,
            LoadError::RootNotADirectory
        ));
    }

    #[test]
    fn test_file_root_is_failure() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not_a_dir.png");
        fs::write(&file, png_bytes()).unwrap();

        let outcome = loader().load_emojis(&file);
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_nested_folders_are_scanned() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pack")).unwrap();
        fs::write(dir.path().join("pack").join("deep.png"), png_bytes()).unwrap();
        fs::write(dir.path().join("top.png"), png_bytes()).unwrap();

        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_success());
        assert_eq!(outcome.items().len(), 2);
    }

    #[test]
    fn test_soundoji_wav_loads_with_normalized_key() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Boop.WAV"), wav_bytes(&[0, 2_000, -2_000, 0])).unwrap();

        let outcome = loader().load_soundojis(dir.path());
        assert!(outcome.is_success());
        assert_eq!(outcome.items()[0].key, TriggerKey::new("boop"));
    }

    #[test]
    fn test_soundoji_garbage_bytes_are_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("static.wav"), b"not audio at all").unwrap();

        let outcome = loader().load_soundojis(dir.path());
        assert!(outcome.is_partial());
        assert!(matches!(
            outcome.failures()[0].error,
            LoadError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_all_files_failing_is_partial_not_failure() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.png"), b"junk").unwrap();
        fs::write(dir.path().join("b.png"), b"junk").unwrap();

        let outcome = loader().load_emojis(dir.path());
        assert!(outcome.is_partial());
        assert!(outcome.items().is_empty());
        assert_eq!(outcome.failures().len(), 2);
    }

    #[test]
    fn test_decode_clip_rejects_empty_audio() {
        let err = decode_clip(wav_bytes(&[])).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(_)));
    }
}
