//! The immutable trigger registry.

use std::collections::HashMap;

use tracing::debug;

use crate::outcome::LoadOutcome;
use crate::resource::{Emoji, Soundoji, TriggerKey};

/// Read-only mapping from trigger keys to loaded resources.
///
/// Built exactly once per session from the loader's outcomes and never
/// mutated afterwards, so any number of concurrent rewrites can consult it
/// without locking. The loader's failure lists are for the caller to
/// surface as diagnostics before the outcomes are consumed here; the
/// registry only ever sees what loaded.
#[derive(Debug, Default)]
pub struct TriggerRegistry {
    emojis: HashMap<TriggerKey, Emoji>,
    soundojis: HashMap<TriggerKey, Soundoji>,
}

impl TriggerRegistry {
    /// Builds the registry from the two batch outcomes.
    ///
    /// Items are inserted in scan order; when two resources normalize to
    /// the same key, the later one in that (sorted, deterministic) order
    /// wins. A `Failure` outcome simply contributes nothing to its
    /// mapping.
    pub fn build(emojis: LoadOutcome<Emoji>, soundojis: LoadOutcome<Soundoji>) -> Self {
        let mut registry = Self::default();
        for emoji in emojis.into_items() {
            registry.emojis.insert(emoji.key.clone(), emoji);
        }
        for soundoji in soundojis.into_items() {
            registry.soundojis.insert(soundoji.key.clone(), soundoji);
        }

        debug!(
            emojis = registry.emojis.len(),
            soundojis = registry.soundojis.len(),
            "built trigger registry"
        );
        registry
    }

    /// Looks up an emoji by normalized key.
    pub fn lookup_emoji(&self, key: &TriggerKey) -> Option<&Emoji> {
        self.emojis.get(key)
    }

    /// Looks up a soundoji by normalized key.
    pub fn lookup_soundoji(&self, key: &TriggerKey) -> Option<&Soundoji> {
        self.soundojis.get(key)
    }

    /// Restarts the named soundoji at the given gain.
    ///
    /// Returns `false` when the key is not registered; the restart itself
    /// is serialized on the resource's own lock.
    pub fn play_soundoji(&self, key: &TriggerKey, gain_db: f32) -> bool {
        match self.soundojis.get(key) {
            Some(soundoji) => {
                soundoji.play(gain_db);
                true
            }
            None => false,
        }
    }

    /// Number of registered emojis.
    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }

    /// Number of registered soundojis.
    pub fn soundoji_count(&self) -> usize {
        self.soundojis.len()
    }

    /// True when neither mapping holds any entries.
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty() && self.soundojis.is_empty()
    }
}
