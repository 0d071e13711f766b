//! `From` implementations bridging `elegy_config` types to `elegy_core` types.

use crate::config::{EmitCfg, GenerationCfg, TriggerCfg};

impl From<&elegy_config::TriggerCfg> for TriggerCfg {
    fn from(c: &elegy_config::TriggerCfg) -> Self {
        Self {
            threshold_cm: c.threshold_cm,
            debounce_ms: c.debounce_ms,
            poll_ms: c.poll_ms,
            echo_timeout_ms: c.echo_timeout_ms,
        }
    }
}

impl From<&elegy_config::GenerationCfg> for GenerationCfg {
    fn from(c: &elegy_config::GenerationCfg) -> Self {
        Self {
            retry_budget: c.retry_budget,
            max_words: c.max_words,
            history_capacity: c.history_capacity,
        }
    }
}

impl From<&elegy_config::PrintingCfg> for EmitCfg {
    fn from(c: &elegy_config::PrintingCfg) -> Self {
        Self {
            slow_reveal: c.slow_reveal,
            reveal_delay_ms: c.reveal_delay_ms,
            blank_feed_lines: c.blank_feed_lines,
            settle_delay_ms: c.settle_delay_ms,
        }
    }
}
