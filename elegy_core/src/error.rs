use thiserror::Error;

/// Failure during a single channel's emission. Caught at the channel
/// boundary by the controller; never propagates across channels.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("open device: {0}")]
    Open(String),
    #[error("device io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error, Clone)]
pub enum BuildError {
    #[error("no channels configured")]
    NoChannels,
    #[error("channel count mismatch: {0} ports vs {1} models")]
    ChannelMismatch(usize, usize),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
}

pub type Result<T> = eyre::Result<T>;
pub use eyre::Report;
