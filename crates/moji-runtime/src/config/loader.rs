//! Configuration loader using figment.
//!
//! Layered, multi-source loading in the usual order (lowest to highest):
//!
//! 1. Built-in defaults
//! 2. Profile-specific config file (`moji.{profile}.toml`)
//! 3. Main config file (`moji.toml` / `config.toml`)
//! 4. Environment variables (`MOJI_*`)
//! 5. Programmatic overrides
//!
//! Environment variables map with the `MOJI_` prefix and `__` as the
//! nesting separator: `MOJI_VOLUME=40` → `volume = 40`,
//! `MOJI_LOGGING__LEVEL=debug` → `logging.level = "debug"`,
//! `MOJI_RESOURCES__MAX_DEPTH=4` → `resources.max_depth = 4`.
//!
//! # Example
//!
//! ```rust,ignore
//! use moji_runtime::config::ConfigLoader;
//!
//! // From default locations plus the environment.
//! let config = ConfigLoader::new().load()?;
//!
//! // From a specific file.
//! let config = ConfigLoader::new().file("./moji.toml").load()?;
//! ```

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use tracing::{debug, info, warn};

use super::error::{ConfigError, ConfigResult};
use super::schema::MojiConfig;
use super::validation::validate_config;

/// Configuration profile for environment-specific settings.
#[derive(Debug, Clone, Default)]
pub enum Profile {
    /// Development profile (default).
    #[default]
    Development,
    /// Production profile.
    Production,
    /// Custom profile name.
    Custom(String),
}

impl Profile {
    /// Returns the profile name as a string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Custom(name) => name,
        }
    }

    /// Creates a profile from `MOJI_PROFILE` or defaults to Development.
    pub fn from_env() -> Self {
        std::env::var("MOJI_PROFILE")
            .map(|p| match p.to_lowercase().as_str() {
                "production" | "prod" => Self::Production,
                "development" | "dev" => Self::Development,
                other => Self::Custom(other.to_string()),
            })
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration loader with figment-based multi-source support.
pub struct ConfigLoader {
    figment: Figment,
    profile: Profile,
    search_paths: Vec<PathBuf>,
    load_env: bool,
    config_file: Option<PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Creates a new configuration loader with defaults.
    pub fn new() -> Self {
        Self {
            figment: Figment::new(),
            profile: Profile::from_env(),
            search_paths: Vec::new(),
            load_env: true,
            config_file: None,
        }
    }

    /// Sets the configuration profile.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        let p = profile.into();
        self.profile = match p.to_lowercase().as_str() {
            "production" | "prod" => Profile::Production,
            "development" | "dev" => Profile::Development,
            _ => Profile::Custom(p),
        };
        self
    }

    /// Adds a search path for configuration files.
    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.search_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Sets a specific configuration file to load instead of searching.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Disables loading environment variables.
    pub fn without_env(mut self) -> Self {
        self.load_env = false;
        self
    }

    /// Merges additional configuration programmatically.
    ///
    /// Programmatic values layer above files and the environment.
    pub fn merge(mut self, config: MojiConfig) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(config));
        self
    }

    /// Loads, validates, and returns the configuration.
    pub fn load(self) -> ConfigResult<MojiConfig> {
        let profile = self.profile.clone();
        let figment = self.build_figment()?;

        let config: MojiConfig = figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        validate_config(&config)?;

        debug!(
            profile = %profile,
            volume = config.volume,
            logging_level = %config.logging.level,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// Builds the figment instance with all sources layered.
    fn build_figment(mut self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(MojiConfig::default()));

        if let Some(path) = self.config_file.take() {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path));
            }
            info!(path = %path.display(), "Loading configuration file");
            figment = figment.merge(Toml::file(path));
        } else {
            figment = self.load_config_files(figment);
        }

        if self.load_env {
            figment = figment.merge(Env::prefixed("MOJI_").split("__"));
        }

        // User's programmatic overrides layer last.
        figment = figment.merge(self.figment);

        Ok(figment)
    }

    /// Resolves the effective list of search paths.
    fn resolve_search_paths(&self) -> Vec<PathBuf> {
        if self.search_paths.is_empty() {
            let mut paths = Vec::new();
            if let Ok(cwd) = std::env::current_dir() {
                paths.push(cwd);
            }
            if let Some(config_dir) = dirs::config_dir() {
                paths.push(config_dir.join("moji"));
            }
            paths
        } else {
            self.search_paths.clone()
        }
    }

    /// Searches for and loads configuration files from the search paths.
    ///
    /// Profile-specific files merge first so the base file wins where both
    /// define a key; the search stops at the first directory with a base
    /// file.
    fn load_config_files(&self, mut figment: Figment) -> Figment {
        for search_path in self.resolve_search_paths() {
            for base_name in ["moji.toml", "config.toml"] {
                let stem = base_name.trim_end_matches(".toml");
                let profile_path =
                    search_path.join(format!("{}.{}.toml", stem, self.profile.as_str()));
                if profile_path.exists() {
                    debug!(path = %profile_path.display(), "Loading profile-specific config");
                    figment = figment.merge(Toml::file(&profile_path));
                }

                let base_path = search_path.join(base_name);
                if base_path.exists() {
                    info!(path = %base_path.display(), "Loading configuration file");
                    return figment.merge(Toml::file(&base_path));
                }
            }
        }

        warn!("No configuration file found, using defaults");
        figment
    }
}

/// Loads the configuration from the default locations.
pub fn load_config() -> ConfigResult<MojiConfig> {
    ConfigLoader::new().load()
}

/// Loads the configuration from a specific file plus the environment.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<MojiConfig> {
    ConfigLoader::new().file(path).load()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigLoader::new().without_env().load().unwrap();
        assert_eq!(config.volume, 70);
        assert_eq!(config.logging.level.as_str(), "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moji.toml");
        std::fs::write(&path, "volume = 35\n[resources]\nmax_depth = 3\n").unwrap();

        let config = ConfigLoader::new()
            .without_env()
            .file(&path)
            .load()
            .unwrap();
        assert_eq!(config.volume, 35);
        assert_eq!(config.resources.max_depth, 3);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigLoader::new()
            .without_env()
            .file(dir.path().join("absent.toml"))
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_search_path_picks_up_base_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("moji.toml"), "volume = 10\n").unwrap();

        let config = ConfigLoader::new()
            .without_env()
            .search_path(dir.path())
            .load()
            .unwrap();
        assert_eq!(config.volume, 10);
    }

    #[test]
    fn test_programmatic_merge_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("moji.toml"), "volume = 10\n").unwrap();

        let config = ConfigLoader::new()
            .without_env()
            .search_path(dir.path())
            .merge(MojiConfig {
                volume: 90,
                ..Default::default()
            })
            .load()
            .unwrap();
        assert_eq!(config.volume, 90);
    }

    #[test]
    fn test_out_of_range_file_value_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moji.toml");
        std::fs::write(&path, "volume = 400\n").unwrap();

        let result = ConfigLoader::new().without_env().file(&path).load();
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
