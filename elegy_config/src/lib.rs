#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
//! Config schema for the installation controller.
//!
//! - `Config` and sub-structs are deserialized from TOML and validated.
//! - Each `[[channels]]` entry describes one sensor/printer slot: device
//!   path, corpus path, and an optional trigger/echo pin pair. A channel
//!   without pins never self-triggers (it only ever prints).
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ChannelCfg {
    /// Write-capable device endpoint, e.g. "/dev/usb/lp0".
    pub device: String,
    /// Plain-text corpus source; absence degrades the channel to "offline".
    pub corpus: String,
    /// Ranging trigger pin (BCM numbering). Both pins or neither.
    pub trig_pin: Option<u8>,
    /// Ranging echo pin (BCM numbering). Both pins or neither.
    pub echo_pin: Option<u8>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
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

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct GenerationCfg {
    /// Attempts to obtain a fresh candidate before falling back.
    pub retry_budget: u32,
    /// Candidates longer than this many words are rejected.
    pub max_words: usize,
    /// Bounded recent-sentence history shared across channels.
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

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PrintingCfg {
    /// Pause after every printed line for a human-perceptible reveal.
    pub slow_reveal: bool,
    /// Per-line reveal delay (ms).
    pub reveal_delay_ms: u64,
    /// Trailing blank feed commands after the sentence.
    pub blank_feed_lines: u32,
    /// Final settle delay before releasing the device (ms).
    pub settle_delay_ms: u64,
}

impl Default for PrintingCfg {
    fn default() -> Self {
        Self {
            slow_reveal: true,
            reveal_delay_ms: 150,
            blank_feed_lines: 12,
            settle_delay_ms: 60,
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Logging {
    pub file: Option<String>,  // path to .log (JSON lines)
    pub level: Option<String>, // "info","debug"
    /// Log rotation policy: "never" | "daily" | "hourly" (default: never)
    pub rotation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub channels: Vec<ChannelCfg>,
    #[serde(default)]
    pub trigger: TriggerCfg,
    #[serde(default)]
    pub generation: GenerationCfg,
    #[serde(default)]
    pub printing: PrintingCfg,
    #[serde(default)]
    pub logging: Logging,
}

pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(s)
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if self.channels.is_empty() {
            eyre::bail!("at least one [[channels]] entry is required");
        }
        for (idx, ch) in self.channels.iter().enumerate() {
            if ch.device.trim().is_empty() {
                eyre::bail!("channels[{idx}].device must not be empty");
            }
            if ch.corpus.trim().is_empty() {
                eyre::bail!("channels[{idx}].corpus must not be empty");
            }
            if ch.trig_pin.is_some() != ch.echo_pin.is_some() {
                eyre::bail!(
                    "channels[{idx}] must set both trig_pin and echo_pin, or neither"
                );
            }
        }

        // Trigger
        if !(self.trigger.threshold_cm > 0.0) {
            eyre::bail!("trigger.threshold_cm must be > 0");
        }
        if self.trigger.poll_ms == 0 {
            eyre::bail!("trigger.poll_ms must be >= 1");
        }
        if self.trigger.echo_timeout_ms == 0 {
            eyre::bail!("trigger.echo_timeout_ms must be >= 1");
        }
        if self.trigger.debounce_ms > 60 * 60 * 1000 {
            eyre::bail!("trigger.debounce_ms is unreasonably large (>1h)");
        }

        // Generation
        if self.generation.retry_budget == 0 {
            eyre::bail!("generation.retry_budget must be >= 1");
        }
        if self.generation.max_words == 0 {
            eyre::bail!("generation.max_words must be >= 1");
        }
        if self.generation.history_capacity == 0 {
            eyre::bail!("generation.history_capacity must be >= 1");
        }

        // Printing: zero delays are legal (fast mode for tests and bench rigs)

        Ok(())
    }
}
