//! Configuration module for the moji runtime.
//!
//! Provides TOML-based layered configuration loading, range validation,
//! and the live [`Settings`] handle the session reads its volume through.

pub mod error;
pub mod loader;
pub mod schema;
pub mod settings;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{LogFormat, LogLevel, LogOutput, LoggingConfig, MojiConfig, ResourceConfig};
pub use settings::Settings;
pub use validation::validate_config;
