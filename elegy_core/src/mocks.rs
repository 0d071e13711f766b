//! Test and helper mocks for elegy_core.

use elegy_traits::{Clock, PrintPort, RangeFinder};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Range finder that replays a fixed sequence of readings, then keeps
/// returning `None`.
pub struct ScriptedRangeFinder {
    readings: Vec<Option<f32>>,
    idx: usize,
}

impl ScriptedRangeFinder {
    pub fn new(readings: impl Into<Vec<Option<f32>>>) -> Self {
        Self {
            readings: readings.into(),
            idx: 0,
        }
    }
}

impl RangeFinder for ScriptedRangeFinder {
    fn measure(
        &mut self,
        _timeout: Duration,
    ) -> Result<Option<f32>, Box<dyn std::error::Error + Send + Sync>> {
        let r = self.readings.get(self.idx).copied().flatten();
        self.idx += 1;
        Ok(r)
    }
}

type Emissions = Arc<Mutex<Vec<Vec<u8>>>>;

/// Print port that records the bytes of every emission.
pub struct RecordingPort {
    id: String,
    emissions: Emissions,
}

impl RecordingPort {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            emissions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle for inspecting recorded emissions after the port has been
    /// moved into a controller.
    pub fn emissions(&self) -> Emissions {
        Arc::clone(&self.emissions)
    }
}

struct RecordingWriter {
    buf: Vec<u8>,
    sink: Emissions,
}

impl Write for RecordingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for RecordingWriter {
    fn drop(&mut self) {
        if let Ok(mut sink) = self.sink.lock() {
            sink.push(std::mem::take(&mut self.buf));
        }
    }
}

impl PrintPort for RecordingPort {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&mut self) -> Result<Box<dyn Write>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Box::new(RecordingWriter {
            buf: Vec::new(),
            sink: Arc::clone(&self.emissions),
        }))
    }
}

/// Print port whose device cannot be opened; simulates a disconnected or
/// jammed printer.
pub struct FailingPort {
    id: String,
    attempts: Arc<Mutex<u32>>,
}

impl FailingPort {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    pub fn attempts(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.attempts)
    }
}

impl PrintPort for FailingPort {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&mut self) -> Result<Box<dyn Write>, Box<dyn std::error::Error + Send + Sync>> {
        if let Ok(mut n) = self.attempts.lock() {
            *n += 1;
        }
        Err(Box::new(std::io::Error::other("device unplugged")))
    }
}

/// Deterministic clock whose time advances only via `sleep` or `advance`.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, d: Duration) {
        if let Ok(mut off) = self.offset.lock() {
            *off = off.saturating_add(d);
        }
    }

    /// Total simulated time slept or advanced so far.
    pub fn elapsed(&self) -> Duration {
        self.offset.lock().map(|g| *g).unwrap_or(Duration::ZERO)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed()
    }

    fn sleep(&self, d: Duration) {
        self.advance(d);
    }
}
