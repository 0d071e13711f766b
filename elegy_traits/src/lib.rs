pub mod clock;

pub use clock::{Clock, MonotonicClock};

/// One ultrasonic ranging channel (trigger/echo pin pair or a simulation).
///
/// `Ok(None)` means the echo did not complete within `timeout`: no object in
/// range or a hardware fault. Callers must treat it as "do not trigger", not
/// as an error. `Err` is reserved for GPIO/bus faults.
pub trait RangeFinder: Send {
    fn measure(
        &mut self,
        timeout: std::time::Duration,
    ) -> Result<Option<f32>, Box<dyn std::error::Error + Send + Sync>>;
}

/// One printer device endpoint, addressed by a stable identifier.
///
/// The endpoint is opened fresh for every emission and released when the
/// returned writer is dropped; implementations must not hold the device open
/// between emissions.
pub trait PrintPort: Send {
    /// Stable identifier for logs (device path or simulation name).
    fn id(&self) -> &str;

    /// Open the device for a single emission.
    fn open(
        &mut self,
    ) -> Result<Box<dyn std::io::Write>, Box<dyn std::error::Error + Send + Sync>>;
}
