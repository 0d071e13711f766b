pub mod error;
pub mod util;

#[cfg(feature = "hardware")]
pub mod hcsr04;

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use elegy_traits::{PrintPort, RangeFinder};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Simulated ranger that reports a presence on every `period`-th poll.
///
/// Useful for soak-testing the dispatch path on a desk with no sensors
/// wired up.
pub struct SimulatedRangeFinder {
    period: u32,
    distance_cm: f32,
    ticks: u32,
}

impl SimulatedRangeFinder {
    pub fn new(period: u32, distance_cm: f32) -> Self {
        SimulatedRangeFinder {
            period: period.max(1),
            distance_cm,
            ticks: 0,
        }
    }
}

impl RangeFinder for SimulatedRangeFinder {
    fn measure(&mut self, _timeout: std::time::Duration) -> Result<Option<f32>, BoxedError> {
        self.ticks += 1;
        if self.ticks % self.period == 0 {
            tracing::debug!(cm = self.distance_cm, "simulated presence");
            Ok(Some(self.distance_cm))
        } else {
            Ok(None)
        }
    }
}

/// Line printer reached through a USB character device such as
/// `/dev/usb/lp0`. The device node is opened fresh for every emission so
/// a printer that was unplugged and replugged recovers on its own.
pub struct UsbPrinter {
    path: PathBuf,
    id: String,
}

impl UsbPrinter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let id = path.display().to_string();
        UsbPrinter { path, id }
    }
}

impl PrintPort for UsbPrinter {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&mut self) -> Result<Box<dyn Write>, BoxedError> {
        let device = OpenOptions::new().write(true).open(&self.path)?;
        Ok(Box::new(device))
    }
}

/// Simulated printer that logs each finished emission instead of writing
/// to a device node.
pub struct SimulatedPrinter {
    id: String,
}

impl SimulatedPrinter {
    pub fn new(id: impl Into<String>) -> Self {
        SimulatedPrinter { id: id.into() }
    }
}

impl PrintPort for SimulatedPrinter {
    fn id(&self) -> &str {
        &self.id
    }

    fn open(&mut self) -> Result<Box<dyn Write>, BoxedError> {
        Ok(Box::new(LogSink {
            device: self.id.clone(),
            buf: Vec::new(),
        }))
    }
}

struct LogSink {
    device: String,
    buf: Vec<u8>,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Drop for LogSink {
    fn drop(&mut self) {
        let text = String::from_utf8_lossy(&self.buf);
        tracing::info!(
            device = %self.device,
            bytes = self.buf.len(),
            text = %text.trim(),
            "simulated emission"
        );
    }
}

#[cfg(feature = "hardware")]
impl RangeFinder for hcsr04::Hcsr04 {
    fn measure(&mut self, timeout: std::time::Duration) -> Result<Option<f32>, BoxedError> {
        self.read_range(timeout).map_err(Into::into)
    }
}
