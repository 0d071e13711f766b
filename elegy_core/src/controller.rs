//! The sequential sense/dispatch loop.
//!
//! One round polls every sensor-bound channel in ascending order, evaluates
//! debounce, and for a fired channel synchronously generates and emits a
//! sentence for every other channel. Dispatch does not overlap: a slow
//! printer delays the next sensor's poll, which is acceptable at this
//! hardware's rate and keeps `RecentSentences` and `Debounce` single-owner
//! with no locking.

use crate::config::{EmitCfg, TriggerCfg};
use crate::debounce::Debounce;
use crate::error::{BuildError, Result};
use crate::generate::Generator;
use crate::{router, transport};
use elegy_traits::clock::{Clock, MonotonicClock};
use elegy_traits::{PrintPort, RangeFinder};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// One sensor/printer slot. A channel without a sensor binding never
/// self-triggers; it only ever prints.
pub struct Channel {
    pub sensor: Option<Box<dyn RangeFinder>>,
    pub port: Box<dyn PrintPort>,
}

pub struct Controller {
    channels: Vec<Channel>,
    generator: Generator,
    debounce: Debounce,
    trigger: TriggerCfg,
    emit_cfg: EmitCfg,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl Controller {
    pub fn new(
        channels: Vec<Channel>,
        generator: Generator,
        trigger: TriggerCfg,
        emit_cfg: EmitCfg,
        clock: Option<Box<dyn Clock + Send + Sync>>,
    ) -> Result<Self> {
        if channels.is_empty() {
            return Err(eyre::Report::new(BuildError::NoChannels));
        }
        if generator.channels() != channels.len() {
            return Err(eyre::Report::new(BuildError::ChannelMismatch(
                channels.len(),
                generator.channels(),
            )));
        }
        if trigger.poll_ms == 0 || trigger.echo_timeout_ms == 0 {
            return Err(eyre::Report::new(BuildError::InvalidConfig(
                "poll_ms and echo_timeout_ms must be >= 1",
            )));
        }
        let clock: Arc<dyn Clock + Send + Sync> = match clock {
            Some(b) => Arc::from(b),
            None => Arc::new(MonotonicClock::new()),
        };
        let debounce = Debounce::new(
            channels.len(),
            trigger.threshold_cm,
            Duration::from_millis(trigger.debounce_ms),
        );
        Ok(Self {
            channels,
            generator,
            debounce,
            trigger,
            emit_cfg,
            clock,
        })
    }

    /// Poll every sensor-bound channel once; dispatch on qualifying
    /// triggers. Returns the number of channels that fired this round.
    pub fn poll_once(&mut self) -> usize {
        let timeout = Duration::from_millis(self.trigger.echo_timeout_ms);
        let mut fired = 0;
        for idx in 0..self.channels.len() {
            let Some(sensor) = self.channels[idx].sensor.as_mut() else {
                continue;
            };
            let distance = match sensor.measure(timeout) {
                Ok(d) => d,
                Err(e) => {
                    tracing::warn!(channel = idx, error = %e, "ranging fault");
                    None
                }
            };
            let now = self.clock.now();
            if !self.debounce.should_fire(idx, distance, now) {
                continue;
            }
            fired += 1;
            tracing::debug!(sensor = idx, distance_cm = distance, "trigger");
            self.dispatch(idx);
        }
        fired
    }

    /// Generate and emit one sentence per target channel, in ascending
    /// order. A failed device write is logged with its identity and cause,
    /// and never blocks the remaining targets.
    fn dispatch(&mut self, source: usize) {
        for target in router::targets(source, self.channels.len()) {
            let sentence = self.generator.generate(target);
            let port = &mut self.channels[target].port;
            match transport::emit(
                port.as_mut(),
                &sentence,
                &self.emit_cfg,
                self.clock.as_ref(),
            ) {
                Ok(()) => {
                    tracing::info!(
                        sensor = source,
                        channel = target,
                        device = port.id(),
                        %sentence,
                        "dispatch"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        sensor = source,
                        channel = target,
                        device = port.id(),
                        error = %e,
                        "emit failed, channel isolated"
                    );
                }
            }
        }
    }

    /// Run poll rounds until `shutdown` is set. Hardware lines are released
    /// when the controller (and its channels) drop.
    pub fn run(&mut self, shutdown: &AtomicBool) {
        let pause = Duration::from_millis(self.trigger.poll_ms);
        tracing::info!(channels = self.channels.len(), "sensing loop active");
        while !shutdown.load(Ordering::Relaxed) {
            self.poll_once();
            if shutdown.load(Ordering::Relaxed) {
                break;
            }
            self.clock.sleep(pause);
        }
        tracing::debug!("sensing loop exiting");
    }

    /// Recorded history size (diagnostics).
    pub fn recent_len(&self) -> usize {
        self.generator.recent_len()
    }
}
