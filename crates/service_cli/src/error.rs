//! CLI error types

use sampler_core::{ConfigError, SamplerError};
use thiserror::Error;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Sampling error: {0}")]
    Sampler(#[from] SamplerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Pinned sequence mismatch: got {got:?}, expected {expected:?}")]
    PinnedMismatch { got: [i32; 3], expected: [i32; 3] },

    #[error("Missing argument: --{0} is required for this sample kind")]
    MissingArgument(&'static str),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
