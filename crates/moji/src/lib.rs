//! # Moji
//!
//! Custom emoji and soundoji triggers for chat messages.
//!
//! ## Overview
//!
//! Moji scans chat messages token by token and swaps recognized trigger
//! words for inline icons (emojis) and audio cues (soundojis). Triggers
//! are plain files: drop `monkaw.png` into the emoji folder and the word
//! "monkaw" renders as that image; drop `boop.wav` into the soundoji
//! folder and "boop" plays it, underlined in the text.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │ resource dirs │───▶│ TriggerRegistry   │◀───│ MessageRewriter │◀── chat
//! │ (scan+decode) │    │ (immutable/session)│    │ (per message)   │──▶ text +
//! └───────────────┘    └──────────────────┘    └─────────────────┘    audio
//! ```
//!
//! - **moji-core**: scanning, decoding, the registry, and the rewriting
//!   algorithm, behind host capability traits for icon rendering and
//!   audio playback.
//! - **moji-runtime**: layered configuration, logging bootstrap, the
//!   diagnostics surface, and the [`Session`](moji_runtime::Session)
//!   that ties it all to the host chat pipeline.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moji::prelude::*;
//!
//! fn main() -> moji_runtime::RuntimeResult<()> {
//!     let config = load_config()?;
//!     moji_runtime::logging::init_from_config(&config.logging);
//!
//!     let session = Session::start(config, host_icons(), host_audio())?;
//!     for line in session.diagnostics().entries() {
//!         eprintln!("failed to load: {line}");
//!     }
//!
//!     // Hook into the host's message events:
//!     // if let Some(text) = session.on_chat_message(message) { ... }
//!     Ok(())
//! }
//! ```

pub use moji_core as core;
pub use moji_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use moji::prelude::*;
/// ```
pub mod prelude {
    // Session - main entry point
    pub use moji_runtime::{Diagnostics, Session};

    // Configuration
    pub use moji_runtime::config::{ConfigLoader, MojiConfig, Settings, load_config};

    // Capability traits the host implements
    pub use moji_core::capability::{
        AudioCapability, IconCapability, PlaybackHandle, VolumeControl,
    };

    // Core types for working with rewrite results directly
    pub use moji_core::{
        AudioTrigger, LoadOutcome, MessageRewriter, RewriteResult, TriggerKey, TriggerLoader,
        TriggerRegistry,
    };
}
