//! Sampler CLI - command line access to the seedable sampler
//!
//! # Commands
//!
//! - `sampler sample <kind>` - Draw values of one kind (int, float, angle, dir2, ...)
//! - `sampler choose <items...>` - Pick items uniformly
//! - `sampler check` - Show the effective configuration and verify the pinned sequence
//!
//! The seed comes from `--seed`, then `SAMPLER_SEED`, then the config file;
//! without any of these the generator is seeded from the clock.

use clap::{Parser, Subcommand};
use sampler_core::SamplerConfig;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::sample::SampleArgs;
use commands::OutputFormat;

/// Seedable uniform sampler
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (ignored if missing)
    #[arg(short, long, global = true, default_value = "sampler.toml")]
    config: String,

    /// Seed overriding the environment and config file
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    seed: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw samples of one kind
    Sample(SampleArgs),

    /// Choose items uniformly from the arguments
    Choose {
        /// Items to choose from
        #[arg(required = true)]
        items: Vec<String>,

        /// Number of independent choices
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show configuration and verify the pinned seed-42 sequence
    Check,
}

fn load_config(cli: &Cli) -> Result<SamplerConfig> {
    let path = Path::new(&cli.config);
    let config = if path.exists() {
        SamplerConfig::from_file(path)?
    } else {
        SamplerConfig::default()
    };
    let mut config = config.apply_env()?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // Initialise tracing; RUST_LOG wins over the configured level
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_filter_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    debug!(config = %cli.config, ?config, "Configuration loaded");

    let mut rng = config.build_rng();
    info!(seed = rng.seed(), "Sampler ready");

    match cli.command {
        Commands::Sample(args) => commands::sample::run(&mut rng, &args),
        Commands::Choose {
            items,
            count,
            format,
        } => commands::choose::run(&mut rng, &items, count, format),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
