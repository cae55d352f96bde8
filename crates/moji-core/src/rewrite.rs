//! Token-by-token message rewriting.
//!
//! A message is split into whitespace-separated tokens; each token is
//! stripped of formatting markup and matched — case-insensitively —
//! against the registry. Emoji matches swap the trigger text for inline
//! icon markup, soundoji matches underline it and queue an audio cue.
//! The emoji and soundoji mappings are consulted independently, so one
//! token can take both transformations.
//!
//! Rewriting has no side effects: audio cues come back as
//! [`AudioTrigger`] requests for the caller to execute against the
//! registry. A message with no matches comes back as `None` and must be
//! delivered untouched.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capability::{IconCapability, VolumeControl};
use crate::gain::volume_to_gain;
use crate::registry::TriggerRegistry;
use crate::resource::TriggerKey;
use crate::text::{split_words, strip_formatting_tags};

/// One audio cue request produced by a rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioTrigger {
    /// The matched soundoji key.
    pub key: TriggerKey,
    /// Gain derived from the volume setting at match time.
    pub gain_db: f32,
}

/// The outcome of rewriting a message that matched at least one trigger.
///
/// Constructed fresh per inbound message and consumed by the caller:
/// the text replaces the original message, and each audio trigger is
/// handed to [`TriggerRegistry::play_soundoji`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewriteResult {
    /// The rewritten message text.
    pub message: String,
    /// Audio cues to fire, in match order.
    pub audio: Vec<AudioTrigger>,
}

/// Rewrites chat messages against an immutable [`TriggerRegistry`].
///
/// Cheap to share and safe to call concurrently: lookups go against the
/// immutable registry, and the only external reads are the icon index and
/// the live volume setting.
pub struct MessageRewriter {
    registry: Arc<TriggerRegistry>,
    icons: Arc<dyn IconCapability>,
    volume: Arc<dyn VolumeControl>,
}

impl MessageRewriter {
    /// Creates a rewriter over a built registry and the host capabilities.
    pub fn new(
        registry: Arc<TriggerRegistry>,
        icons: Arc<dyn IconCapability>,
        volume: Arc<dyn VolumeControl>,
    ) -> Self {
        Self {
            registry,
            icons,
            volume,
        }
    }

    /// Rewrites `message`, returning `None` when nothing matched.
    ///
    /// Tokens that match nothing are carried through byte-for-byte; only
    /// the separators are normalized, each one becoming a single space.
    /// With `play_audio` false, soundoji matches still underline their
    /// token but no audio triggers are emitted — the visual-only mode used
    /// for overhead text.
    ///
    /// The gain on each trigger reflects the volume setting at the moment
    /// of that match; it is read per trigger, never cached.
    pub fn rewrite(&self, message: &str, play_audio: bool) -> Option<RewriteResult> {
        if message.is_empty() {
            return None;
        }

        let mut edited = false;
        let mut audio = Vec::new();
        let mut words: Vec<String> = Vec::new();

        for word in split_words(message) {
            let mut token = word.to_string();
            let stripped = strip_formatting_tags(word);

            // A token that is only markup strips down to nothing and can
            // never match; the registry holds no empty key.
            if !stripped.is_empty() {
                let key = TriggerKey::new(&stripped);

                if let Some(emoji) = self.registry.lookup_emoji(&key) {
                    let index = self.icons.icon_index(emoji.icon);
                    token = token.replace(&stripped, &format!("<img={index}>"));
                    edited = true;
                    debug!(key = %key, index, "replaced emoji trigger");
                }

                // Checked independently of the emoji mapping: a token may
                // carry both transformations. The substitution runs on the
                // token as already rewritten above.
                if self.registry.lookup_soundoji(&key).is_some() {
                    token = token.replace(&stripped, &format!("<u>{stripped}</u>"));
                    edited = true;
                    if play_audio {
                        let gain_db = volume_to_gain(self.volume.current_volume());
                        debug!(key = %key, gain_db, "queued soundoji trigger");
                        audio.push(AudioTrigger {
                            key: key.clone(),
                            gain_db,
                        });
                    }
                }
            }

            words.push(token);
        }

        if !edited {
            return None;
        }

        Some(RewriteResult {
            message: words.join(" "),
            audio,
        })
    }
}
