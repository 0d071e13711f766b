//! Sentence selection with bounded repeat-avoidance.

use crate::config::GenerationCfg;
use crate::history::RecentSentences;
use crate::markov::TextModel;

/// Fixed literal for channels with no usable text model.
pub const OFFLINE_SENTENCE: &str = "Subsystem offline.";

/// Fixed literal when the retry budget is exhausted under repetition
/// pressure. Never recorded in the recent history: it must stay
/// permanently available.
pub const EXHAUSTED_SENTENCE: &str = "Silent words fell softly.";

/// One text model per output channel plus the shared recent history.
#[derive(Debug)]
pub struct Generator {
    models: Vec<Option<TextModel>>,
    recent: RecentSentences,
    cfg: GenerationCfg,
}

impl Generator {
    pub fn new(models: Vec<Option<TextModel>>, cfg: GenerationCfg) -> Self {
        Self {
            models,
            recent: RecentSentences::new(cfg.history_capacity),
            cfg,
        }
    }

    /// Number of channels this generator serves.
    pub fn channels(&self) -> usize {
        self.models.len()
    }

    /// Whether a channel has a usable text model.
    pub fn is_online(&self, channel: usize) -> bool {
        matches!(self.models.get(channel), Some(Some(_)))
    }

    /// Produce one sentence for `channel`.
    ///
    /// Offline channels yield `OFFLINE_SENTENCE` with no history
    /// interaction. Otherwise candidates are drawn until one is non-empty
    /// and not in the recent history; accepted sentences are recorded
    /// (evicting the oldest beyond capacity). Budget exhaustion yields
    /// `EXHAUSTED_SENTENCE`.
    pub fn generate(&mut self, channel: usize) -> String {
        let Some(Some(model)) = self.models.get_mut(channel) else {
            return OFFLINE_SENTENCE.to_string();
        };
        for _ in 0..self.cfg.retry_budget {
            let Some(candidate) = model.make_sentence(self.cfg.max_words) else {
                continue;
            };
            if candidate.is_empty() || self.recent.contains(&candidate) {
                continue;
            }
            self.recent.insert(candidate.clone());
            return candidate;
        }
        tracing::debug!(channel, "generation budget exhausted, using fallback");
        EXHAUSTED_SENTENCE.to_string()
    }

    /// Recorded history size (for tests and diagnostics).
    pub fn recent_len(&self) -> usize {
        self.recent.len()
    }
}
