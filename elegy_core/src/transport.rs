//! Output transport: ESC/POS byte protocol, reversed word lines, pacing.
//!
//! The device prints upside-down, one word per line, so the sentence is
//! emitted in reverse word order and reads top-down once the paper is torn
//! off and turned around.

use crate::config::EmitCfg;
use crate::error::EmitError;
use elegy_traits::{Clock, PrintPort};
use std::time::Duration;

pub const ESC_INIT: &[u8] = b"\x1B\x40";
pub const ESC_UPSIDE_DOWN_ON: &[u8] = b"\x1B\x7B\x01";
pub const ESC_BOLD_ON: &[u8] = b"\x1B\x45\x01";
pub const ESC_BOLD_OFF: &[u8] = b"\x1B\x45\x00";
pub const ESC_FONT_A: &[u8] = b"\x1B\x4D\x00";
pub const ESC_FEED_LINE: &[u8] = b"\x1B\x64\x01";

/// Placeholder printed when a sentence tokenizes to nothing.
pub const PLACEHOLDER_LINE: &str = "…";

/// Tokenize `sentence` into lowercase alphabetic words (apostrophes kept,
/// everything else dropped), capitalize the opening word, and reverse the
/// order. The opening word therefore comes out *last*, matching the
/// upside-down print orientation.
pub fn sentence_to_lines(sentence: &str) -> Vec<String> {
    let lower = sentence.to_lowercase();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch == '\'' {
            current.push(ch);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    if words.is_empty() {
        return vec![PLACEHOLDER_LINE.to_string()];
    }
    if let Some(first) = words.first_mut() {
        let mut chars = first.chars();
        if let Some(c) = chars.next() {
            *first = c.to_ascii_uppercase().to_string() + chars.as_str();
        }
    }
    words.reverse();
    words
}

/// Emit one sentence to a device endpoint.
///
/// The endpoint is opened for the duration of this call only; the handle is
/// dropped (releasing the device) on every path, including errors. Any I/O
/// failure is returned typed for the caller to log and isolate.
pub fn emit(
    port: &mut dyn PrintPort,
    sentence: &str,
    cfg: &EmitCfg,
    clock: &dyn Clock,
) -> Result<(), EmitError> {
    let mut dev = port.open().map_err(|e| EmitError::Open(e.to_string()))?;

    dev.write_all(ESC_INIT)?;
    dev.write_all(ESC_UPSIDE_DOWN_ON)?;
    dev.write_all(ESC_BOLD_ON)?;
    dev.write_all(ESC_FONT_A)?;

    let reveal = Duration::from_millis(cfg.reveal_delay_ms);
    for line in sentence_to_lines(sentence) {
        dev.write_all(line.as_bytes())?;
        dev.write_all(b"\n")?;
        dev.flush()?;
        if cfg.slow_reveal {
            clock.sleep(reveal);
        }
    }

    dev.write_all(ESC_BOLD_OFF)?;
    dev.write_all(ESC_FEED_LINE)?;
    dev.flush()?;

    if cfg.slow_reveal {
        for _ in 0..cfg.blank_feed_lines {
            dev.write_all(ESC_FEED_LINE)?;
            dev.flush()?;
            clock.sleep(reveal / 2);
        }
    } else {
        let batch = ESC_FEED_LINE.repeat(cfg.blank_feed_lines as usize);
        dev.write_all(&batch)?;
        dev.flush()?;
    }

    // Leave the device in orientation mode for the next caller.
    dev.write_all(ESC_UPSIDE_DOWN_ON)?;
    dev.flush()?;
    clock.sleep(Duration::from_millis(cfg.settle_delay_ms));
    Ok(())
}
