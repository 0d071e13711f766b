//! Process setup: logging, corpus loading, and channel assembly.

use std::fs;
use std::path::Path;

use eyre::Result;
#[cfg(feature = "hardware")]
use eyre::WrapErr;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use elegy_core::{Channel, TextModel};
use elegy_hardware::{SimulatedPrinter, SimulatedRangeFinder, UsbPrinter};
use elegy_traits::{PrintPort, RangeFinder};

use crate::cli::FILE_GUARD;

/// Install the global tracing subscriber. Console output goes to stderr;
/// when `[logging].file` is set, a JSON-lines file layer is added with the
/// configured rotation.
pub fn init_logging(log: &elegy_config::Logging, json: bool, cli_level: &str) {
    let level = log.level.as_deref().unwrap_or(cli_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = if json {
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer().compact().with_writer(std::io::stderr).boxed()
    };

    let file = log.file.as_ref().map(|path| {
        let path = Path::new(path);
        let dir = match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let name = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("elegy.log"));
        let appender = match log.rotation.as_deref() {
            Some("daily") => tracing_appender::rolling::daily(dir, name),
            Some("hourly") => tracing_appender::rolling::hourly(dir, name),
            _ => tracing_appender::rolling::never(dir, name),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = FILE_GUARD.set(guard);
        fmt::layer()
            .json()
            .with_ansi(false)
            .with_writer(writer)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();
}

/// Build one text model per channel, in config order. A channel whose
/// corpus is unreadable or has no usable sentences gets `None` and runs
/// offline; the rest of the installation is unaffected.
pub fn load_models(channels: &[elegy_config::ChannelCfg]) -> Vec<Option<TextModel>> {
    channels
        .iter()
        .map(|ch| {
            let text = match fs::read_to_string(&ch.corpus) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(
                        corpus = %ch.corpus,
                        error = %e,
                        "corpus unreadable; channel runs offline"
                    );
                    return None;
                }
            };
            match TextModel::from_corpus(&text) {
                Some(model) => Some(model),
                None => {
                    tracing::warn!(
                        corpus = %ch.corpus,
                        "corpus has no usable sentences; channel runs offline"
                    );
                    None
                }
            }
        })
        .collect()
}

/// Assemble sensor/printer pairs from the config. With `simulate`, every
/// channel gets a logging printer and pin-bearing channels get a periodic
/// fake ranger instead of real GPIO.
pub fn build_channels(
    cfg: &elegy_config::Config,
    simulate: bool,
    sim_period: u32,
) -> Result<Vec<Channel>> {
    let mut out = Vec::with_capacity(cfg.channels.len());
    for (idx, ch) in cfg.channels.iter().enumerate() {
        let port: Box<dyn PrintPort> = if simulate {
            Box::new(SimulatedPrinter::new(ch.device.clone()))
        } else {
            Box::new(UsbPrinter::new(&ch.device))
        };

        let sensor: Option<Box<dyn RangeFinder>> = match (ch.trig_pin, ch.echo_pin) {
            (Some(_), Some(_)) if simulate => Some(Box::new(SimulatedRangeFinder::new(
                sim_period,
                cfg.trigger.threshold_cm / 2.0,
            ))),
            (Some(trig), Some(echo)) => {
                #[cfg(feature = "hardware")]
                {
                    let ranger = elegy_hardware::hcsr04::Hcsr04::new(trig, echo)
                        .wrap_err_with(|| {
                            format!("channel {idx}: hc-sr04 on pins trig={trig} echo={echo}")
                        })?;
                    Some(Box::new(ranger))
                }
                #[cfg(not(feature = "hardware"))]
                {
                    tracing::warn!(
                        channel = idx,
                        trig,
                        echo,
                        "built without hardware support; channel is print-only"
                    );
                    None
                }
            }
            _ => None,
        };

        out.push(Channel { sensor, port });
    }
    Ok(out)
}
