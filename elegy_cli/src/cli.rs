//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(
    name = "elegy",
    version,
    about = "Proximity-triggered thermal-printer installation controller"
)]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/elegy.toml")]
    pub config: PathBuf,

    /// Log as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the installation loop until interrupted
    Run {
        /// Use simulated rangers and printers regardless of pin config
        #[arg(long, action = ArgAction::SetTrue)]
        simulate: bool,
        /// Simulated presence period, in polls (used with --simulate)
        #[arg(long, value_name = "POLLS", default_value_t = 40)]
        sim_period: u32,
    },
    /// Load the config and corpora, report per-channel status, and exit
    SelfCheck,
}
