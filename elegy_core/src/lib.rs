#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
//! Triggering-and-dispatch engine for the print installation (hardware-agnostic).
//!
//! All hardware interactions go through `elegy_traits::RangeFinder` and
//! `elegy_traits::PrintPort` traits.
//!
//! ## Architecture
//!
//! - **Debounce**: per-channel last-fire gating over a monotonic clock
//!   (`debounce` module)
//! - **Routing**: a fired sensor activates every *other* channel (`router`)
//! - **Generation**: per-channel Markov models with a shared bounded
//!   recent-sentence history (`markov`, `history`, `generate`)
//! - **Transport**: ESC/POS byte protocol with reversed word lines and
//!   reveal pacing (`transport`)
//! - **Controller**: the sequential sense/dispatch loop (`controller`)

pub mod config;
pub mod controller;
pub mod conversions;
pub mod debounce;
pub mod error;
pub mod generate;
pub mod history;
pub mod markov;
pub mod mocks;
pub mod router;
pub mod transport;

pub use config::{EmitCfg, GenerationCfg, TriggerCfg};
pub use controller::{Channel, Controller};
pub use debounce::Debounce;
pub use error::{BuildError, EmitError};
pub use generate::{EXHAUSTED_SENTENCE, Generator, OFFLINE_SENTENCE};
pub use history::RecentSentences;
pub use markov::TextModel;
pub use transport::{emit, sentence_to_lines};
