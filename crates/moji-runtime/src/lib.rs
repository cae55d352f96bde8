//! Moji Runtime - orchestration layer for the Moji chat trigger engine.
//!
//! This crate provides:
//! - Layered TOML/environment configuration ([`config`])
//! - Logging bootstrap over `tracing` ([`logging`])
//! - The diagnostics surface for load failures ([`Diagnostics`])
//! - Session wiring from resource folders to message rewriting
//!   ([`Session`])
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use moji_runtime::{Session, config::load_config, logging};
//!
//! let config = load_config()?;
//! logging::init_from_config(&config.logging);
//!
//! // `icons` and `audio` come from the host's renderer and mixer.
//! let session = Session::start(config, icons, audio)?;
//!
//! // Per inbound chat message:
//! if let Some(new_text) = session.on_chat_message(text) {
//!     node.set_text(new_text);
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod session;

// Re-exports
pub use config::{
    ConfigError, ConfigLoader, ConfigResult, LoggingConfig, MojiConfig, Profile, ResourceConfig,
    Settings, load_config, load_config_from_file,
};
pub use diagnostics::Diagnostics;
pub use error::{RuntimeError, RuntimeResult};
pub use logging::LoggingBuilder;
pub use session::Session;

// Re-export tracing for use by other crates
pub use tracing;
pub use tracing_subscriber;

/// Prelude module for convenient imports.
///
/// Provides the commonly used logging macros alongside the session entry
/// points.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};

    pub use super::{Diagnostics, Session};
    pub use super::config::{ConfigLoader, MojiConfig, Settings, load_config};
}
