//! Error types for the simulator

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// A configuration field violated its documented minimum. Surfaced before
    /// any trial runs; never retried.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A single trial exceeded the safety step ceiling. Some configurations
    /// can never cover the map (e.g. every possible roll is a multiple of the
    /// block count), so the walk is bounded and aborts instead of hanging.
    #[error("trial exceeded step ceiling: {steps} steps (ceiling {ceiling})")]
    Timeout { steps: u64, ceiling: u64 },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("malformed CSV at line {line}: {message}")]
    Csv { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
