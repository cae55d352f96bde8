//! Live, shared view of the loaded configuration.

use parking_lot::RwLock;

use moji_core::VolumeControl;

use super::schema::MojiConfig;

/// Shared handle to the session's configuration.
///
/// The registry is fixed for the session, but the volume setting is read
/// through [`VolumeControl`] on every audio trigger, so a value changed
/// via [`Settings::update`] takes effect on the very next trigger without
/// rebuilding anything.
#[derive(Debug)]
pub struct Settings {
    config: RwLock<MojiConfig>,
}

impl Settings {
    /// Wraps a loaded configuration.
    pub fn new(config: MojiConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// A copy of the current configuration.
    pub fn snapshot(&self) -> MojiConfig {
        self.config.read().clone()
    }

    /// Applies a mutation to the live configuration.
    pub fn update(&self, apply: impl FnOnce(&mut MojiConfig)) {
        apply(&mut self.config.write());
    }
}

impl VolumeControl for Settings {
    fn current_volume(&self) -> u32 {
        self.config.read().volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_tracks_updates() {
        let settings = Settings::new(MojiConfig::default());
        assert_eq!(settings.current_volume(), 70);

        settings.update(|config| config.volume = 25);
        assert_eq!(settings.current_volume(), 25);
        assert_eq!(settings.snapshot().volume, 25);
    }
}
