//! Plain config structs for the engine. Values are fixed for a deployment;
//! the TOML-facing schema lives in `elegy_config` and is bridged by
//! `conversions`.

/// Proximity trigger configuration.
#[derive(Debug, Clone, Copy)]
pub struct TriggerCfg {
    /// Fire when a reading is strictly below this distance (cm).
    pub threshold_cm: f32,
    /// Minimum gap between two fires on the same channel (ms).
    pub debounce_ms: u64,
    /// Pause between sequential poll rounds (ms).
    pub poll_ms: u64,
    /// Per-phase echo wait budget (ms).
    pub echo_timeout_ms: u64,
}

impl Default for TriggerCfg {
    fn default() -> Self {
        Self {
            threshold_cm: 40.0,
            debounce_ms: 3_000,
            poll_ms: 50,
            echo_timeout_ms: 30,
        }
    }
}

/// Text generation configuration.
#[derive(Debug, Clone, Copy)]
pub struct GenerationCfg {
    /// Attempts to obtain a fresh candidate before falling back.
    pub retry_budget: u32,
    /// Candidates longer than this many words are rejected.
    pub max_words: usize,
    /// Capacity of the shared recent-sentence history.
    pub history_capacity: usize,
}

impl Default for GenerationCfg {
    fn default() -> Self {
        Self {
            retry_budget: 120,
            max_words: 80,
            history_capacity: 500,
        }
    }
}

/// Output transport pacing and trailer configuration.
#[derive(Debug, Clone, Copy)]
pub struct EmitCfg {
    /// Pause after every printed line for a human-perceptible reveal.
    pub slow_reveal: bool,
    /// Per-line reveal delay (ms). Trailing feeds use half of this in slow mode.
    pub reveal_delay_ms: u64,
    /// Trailing blank feed commands after the sentence.
    pub blank_feed_lines: u32,
    /// Final settle delay before releasing the device (ms).
    pub settle_delay_ms: u64,
}

impl Default for EmitCfg {
    fn default() -> Self {
        Self {
            slow_reveal: true,
            reveal_delay_ms: 150,
            blank_feed_lines: 12,
            settle_delay_ms: 60,
        }
    }
}
