//! Session wiring: one load pass, then message rewriting for the host.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use moji_core::{
    AudioCapability, IconCapability, LoadOutcome, MessageRewriter, TriggerLoader, TriggerRegistry,
    VolumeControl,
};

use crate::config::{MojiConfig, Settings};
use crate::diagnostics::Diagnostics;
use crate::error::{RuntimeError, RuntimeResult};

/// Directory under the platform data dir holding default resources.
const DATA_DIR_NAME: &str = "moji";
/// Default emoji folder name.
const EMOJI_DIR_NAME: &str = "emojis";
/// Default soundoji folder name.
const SOUNDOJI_DIR_NAME: &str = "soundojis";

/// A running chat-trigger session.
///
/// Construction performs the one-and-only load pass: the resource folders
/// are resolved (and created on first run), scanned, and decoded into an
/// immutable [`TriggerRegistry`]. After that the session only rewrites
/// messages — there is no hot-reload; fixing a bad resource file means
/// starting a new session.
///
/// Per-file load failures are recorded in [`Session::diagnostics`] and are
/// not fatal; neither is a resource root that exists but is not a
/// directory (that mapping just stays empty).
pub struct Session {
    registry: Arc<TriggerRegistry>,
    rewriter: MessageRewriter,
    diagnostics: Diagnostics,
    settings: Arc<Settings>,
}

impl Session {
    /// Starts a session over the host-provided capabilities.
    pub fn start(
        config: MojiConfig,
        icons: Arc<dyn IconCapability>,
        audio: Arc<dyn AudioCapability>,
    ) -> RuntimeResult<Self> {
        crate::config::validate_config(&config)?;

        let emoji_dir = resolve_dir(config.resources.emoji_dir.clone(), EMOJI_DIR_NAME)?;
        let soundoji_dir = resolve_dir(config.resources.soundoji_dir.clone(), SOUNDOJI_DIR_NAME)?;
        ensure_dir(&emoji_dir)?;
        ensure_dir(&soundoji_dir)?;

        let diagnostics = Diagnostics::new();
        let loader = TriggerLoader::new(Arc::clone(&icons), audio)
            .with_max_depth(config.resources.max_depth);

        let emojis = loader.load_emojis(&emoji_dir);
        report(&diagnostics, "emoji", &emoji_dir, &emojis);
        let soundojis = loader.load_soundojis(&soundoji_dir);
        report(&diagnostics, "soundoji", &soundoji_dir, &soundojis);

        let settings = Arc::new(Settings::new(config));
        let registry = Arc::new(TriggerRegistry::build(emojis, soundojis));
        info!(
            emojis = registry.emoji_count(),
            soundojis = registry.soundoji_count(),
            failures = diagnostics.len(),
            "session started"
        );

        let rewriter = MessageRewriter::new(
            Arc::clone(&registry),
            icons,
            Arc::clone(&settings) as Arc<dyn VolumeControl>,
        );

        Ok(Self {
            registry,
            rewriter,
            diagnostics,
            settings,
        })
    }

    /// Handles an inbound chat message.
    ///
    /// Returns the replacement text, or `None` when the message must be
    /// delivered untouched. Matched soundojis are restarted as a side
    /// effect.
    pub fn on_chat_message(&self, message: &str) -> Option<String> {
        self.apply(message, true)
    }

    /// Handles overhead text: visual substitution only, no audio.
    pub fn on_overhead_text(&self, message: &str) -> Option<String> {
        self.apply(message, false)
    }

    fn apply(&self, message: &str, play_audio: bool) -> Option<String> {
        let result = self.rewriter.rewrite(message, play_audio)?;
        for trigger in &result.audio {
            self.registry.play_soundoji(&trigger.key, trigger.gain_db);
        }
        Some(result.message)
    }

    /// The immutable registry backing this session.
    pub fn registry(&self) -> &Arc<TriggerRegistry> {
        &self.registry
    }

    /// Load failures recorded at session start, human-readable and in
    /// load order.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// The live settings handle (volume is read through it per trigger).
    pub fn settings(&self) -> &Arc<Settings> {
        &self.settings
    }
}

/// Resolves a resource folder: configured path, or the platform default.
fn resolve_dir(configured: Option<PathBuf>, name: &str) -> RuntimeResult<PathBuf> {
    match configured {
        Some(dir) => Ok(dir),
        None => dirs::data_dir()
            .map(|base| base.join(DATA_DIR_NAME).join(name))
            .ok_or(RuntimeError::NoDataDir),
    }
}

/// Creates a resource folder on first run.
///
/// A path that already exists is left alone even when it is not a
/// directory — the loader then reports it as a root failure instead.
fn ensure_dir(path: &Path) -> RuntimeResult<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| RuntimeError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "created resource folder");
    }
    Ok(())
}

/// Surfaces a batch outcome: failures into diagnostics, counts into logs.
fn report<T>(diagnostics: &Diagnostics, kind: &str, dir: &Path, outcome: &LoadOutcome<T>) {
    diagnostics.record_all(outcome.failures());
    if outcome.is_failure() {
        error!(
            kind,
            path = %dir.display(),
            "failed to load triggers: root is not a directory"
        );
    } else {
        info!(
            kind,
            loaded = outcome.items().len(),
            failed = outcome.failures().len(),
            path = %dir.display(),
            "loaded triggers"
        );
    }
}
