use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use eyre::{Result, WrapErr};

mod cli;
mod setup;

use cli::{Cli, Commands};
use elegy_core::{Controller, Generator};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();

    let text = fs::read_to_string(&args.config)
        .wrap_err_with(|| format!("failed to read config {}", args.config.display()))?;
    let cfg = elegy_config::load_toml(&text)
        .wrap_err_with(|| format!("failed to parse config {}", args.config.display()))?;
    cfg.validate()?;

    setup::init_logging(&cfg.logging, args.json, &args.log_level);

    match args.cmd {
        Commands::SelfCheck => self_check(&cfg),
        Commands::Run {
            simulate,
            sim_period,
        } => run(&cfg, simulate, sim_period),
    }
}

fn run(cfg: &elegy_config::Config, simulate: bool, sim_period: u32) -> Result<()> {
    let models = setup::load_models(&cfg.channels);
    let online = models.iter().filter(|m| m.is_some()).count();
    tracing::info!(
        channels = cfg.channels.len(),
        online,
        simulate,
        "starting installation loop"
    );

    let generation: elegy_core::GenerationCfg = (&cfg.generation).into();
    let generator = Generator::new(models, generation);
    let channels = setup::build_channels(cfg, simulate, sim_period)?;
    let trigger: elegy_core::TriggerCfg = (&cfg.trigger).into();
    let emit_cfg: elegy_core::EmitCfg = (&cfg.printing).into();
    let mut controller = Controller::new(channels, generator, trigger, emit_cfg, None)?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let flag = shutdown.clone();
    ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    })
    .wrap_err("failed to install signal handler")?;

    controller.run(&shutdown);

    tracing::info!(recent = controller.recent_len(), "interrupted; shutting down");
    Ok(())
}

/// Report per-channel readiness without touching any device node or GPIO.
fn self_check(cfg: &elegy_config::Config) -> Result<()> {
    let models = setup::load_models(&cfg.channels);
    let mut offline = 0usize;
    for (idx, (ch, model)) in cfg.channels.iter().zip(&models).enumerate() {
        let status = if model.is_some() {
            "online"
        } else {
            offline += 1;
            "offline"
        };
        let sensor = match (ch.trig_pin, ch.echo_pin) {
            (Some(t), Some(e)) => format!("trig={t} echo={e}"),
            _ => "none".to_string(),
        };
        let device = if fs::metadata(&ch.device).is_ok() {
            "present"
        } else {
            "missing"
        };
        println!(
            "channel {idx}: device={} ({device}) corpus={} model={status} sensor={sensor}",
            ch.device, ch.corpus
        );
    }
    println!(
        "self-check: {} channels, {} offline",
        cfg.channels.len(),
        offline
    );
    Ok(())
}
