use std::time::{Duration, Instant};
use tracing::trace;

use crate::error::{HwError, Result};
use crate::util::wait_for_level;

/// Speed of sound at room temperature, in centimetres per second.
pub const SPEED_OF_SOUND_CM_S: f32 = 34_300.0;

const TRIGGER_PULSE: Duration = Duration::from_micros(10);
const EDGE_POLL: Duration = Duration::from_micros(5);

/// HC-SR04 ultrasonic ranger driven over two GPIO lines.
pub struct Hcsr04 {
    trig: rppal::gpio::OutputPin,
    echo: rppal::gpio::InputPin,
}

impl Hcsr04 {
    pub fn new(trig_pin: u8, echo_pin: u8) -> Result<Self> {
        let gpio = rppal::gpio::Gpio::new().map_err(|e| HwError::Gpio(e.to_string()))?;
        let mut trig = gpio
            .get(trig_pin)
            .map_err(|e| HwError::Gpio(e.to_string()))?
            .into_output();
        trig.set_low(); // trigger idle low
        let echo = gpio
            .get(echo_pin)
            .map_err(|e| HwError::Gpio(e.to_string()))?
            .into_input();
        Ok(Self { trig, echo })
    }

    /// One trigger/echo cycle. Returns `Ok(None)` when the echo never
    /// arrives or never ends within `timeout`; the module treats both as
    /// "nothing in range" rather than a fault.
    pub fn read_range(&mut self, timeout: Duration) -> Result<Option<f32>> {
        // 10 microsecond trigger pulse starts the burst.
        self.trig.set_high();
        let t0 = Instant::now();
        while t0.elapsed() < TRIGGER_PULSE {
            std::hint::spin_loop();
        }
        self.trig.set_low();

        let echo = &self.echo;
        if wait_for_level(|| echo.is_high(), timeout, EDGE_POLL).is_err() {
            return Ok(None);
        }
        let pulse_start = Instant::now();
        if wait_for_level(|| echo.is_low(), timeout, EDGE_POLL).is_err() {
            return Ok(None);
        }
        let pulse = pulse_start.elapsed();

        // Out and back, so halve the distance covered by the pulse.
        let cm = pulse.as_secs_f32() * SPEED_OF_SOUND_CM_S / 2.0;
        trace!(cm, "hcsr04 range sample");
        Ok(Some(cm))
    }
}
