use std::time::{Duration, Instant};

use crate::error::{HwError, Result};

/// Wait until the provided `at_level` predicate becomes true, or a timeout
/// expires. Spins in small sleep intervals; echo edges are sub-millisecond
/// events so the poll interval should stay in the microsecond range.
pub fn wait_for_level(
    mut at_level: impl FnMut() -> bool,
    timeout: Duration,
    poll_interval: Duration,
) -> Result<()> {
    let deadline = Instant::now() + timeout;
    while !at_level() {
        if Instant::now() >= deadline {
            return Err(HwError::EchoTimeout);
        }
        std::thread::sleep(poll_interval);
    }
    Ok(())
}
