//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod choose;
pub mod sample;

use clap::ValueEnum;
use serde::Serialize;

use crate::Result;

/// Output format for drawn values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    Table,
    /// JSON array
    Json,
}

/// Render values one per line or as a JSON array.
pub fn render<T: Serialize + std::fmt::Display>(values: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(values)?),
    }
}
