//! Per-channel trigger debounce over a monotonic clock.

use std::time::{Duration, Instant};

/// Last-fire timestamps plus the firing decision. All channels start
/// fireable: the first sub-threshold reading fires immediately.
#[derive(Debug)]
pub struct Debounce {
    threshold_cm: f32,
    interval: Duration,
    last_fire: Vec<Option<Instant>>,
}

impl Debounce {
    pub fn new(channels: usize, threshold_cm: f32, interval: Duration) -> Self {
        Self {
            threshold_cm,
            interval,
            last_fire: vec![None; channels],
        }
    }

    /// Decide whether `distance` constitutes a fresh trigger on `channel`.
    ///
    /// On `true` the channel's last-fire timestamp is updated *before*
    /// returning, so slow downstream dispatch cannot re-fire the same
    /// reading.
    pub fn should_fire(&mut self, channel: usize, distance: Option<f32>, now: Instant) -> bool {
        let Some(cm) = distance else {
            return false;
        };
        if cm >= self.threshold_cm {
            return false;
        }
        let Some(slot) = self.last_fire.get_mut(channel) else {
            return false;
        };
        if let Some(last) = *slot
            && now.saturating_duration_since(last) <= self.interval
        {
            return false;
        }
        *slot = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Debounce;
    use std::time::{Duration, Instant};

    #[test]
    fn no_reading_never_fires() {
        let mut d = Debounce::new(2, 40.0, Duration::from_secs(3));
        assert!(!d.should_fire(0, None, Instant::now()));
    }

    #[test]
    fn far_reading_never_fires() {
        let mut d = Debounce::new(2, 40.0, Duration::from_secs(3));
        assert!(!d.should_fire(0, Some(40.0), Instant::now()));
        assert!(!d.should_fire(0, Some(120.5), Instant::now()));
    }

    #[test]
    fn first_close_reading_fires_immediately() {
        let mut d = Debounce::new(2, 40.0, Duration::from_secs(3));
        assert!(d.should_fire(0, Some(30.0), Instant::now()));
    }

    #[test]
    fn refire_within_interval_is_suppressed() {
        let mut d = Debounce::new(2, 40.0, Duration::from_secs(3));
        let t0 = Instant::now();
        assert!(d.should_fire(0, Some(30.0), t0));
        assert!(!d.should_fire(0, Some(30.0), t0 + Duration::from_secs(1)));
        assert!(d.should_fire(0, Some(30.0), t0 + Duration::from_secs(4)));
    }

    #[test]
    fn channels_debounce_independently() {
        let mut d = Debounce::new(2, 40.0, Duration::from_secs(3));
        let t0 = Instant::now();
        assert!(d.should_fire(0, Some(30.0), t0));
        assert!(d.should_fire(1, Some(30.0), t0));
    }

    #[test]
    fn unknown_channel_never_fires() {
        let mut d = Debounce::new(1, 40.0, Duration::from_secs(3));
        assert!(!d.should_fire(5, Some(10.0), Instant::now()));
    }
}
