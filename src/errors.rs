// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreadsimError {
    /// A run parameter is outside the range the engine can simulate
    /// (thread count, zero quantum, duplicate ids, ...).
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The round-robin loop would never finish with the given inputs.
    #[error("Non-terminating schedule: {0}")]
    NonTerminatingSchedule(String),

    /// The cancellation flag was raised while the simulation was running.
    #[error("Simulation cancelled")]
    Cancelled,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThreadsimError>;
