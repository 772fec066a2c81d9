//! Sampler configuration management
//!
//! Loads the seed and log level from TOML files and environment variables.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use crate::rng::SamplerRng;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "SAMPLER_SEED";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "SAMPLER_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Verbosity of the `tracing` output, as written in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Every level, most verbose first
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Case-insensitive, for values coming from the environment
impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_filter_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

/// Sampler configuration structure
///
/// # Examples
///
/// ```rust
/// use sampler_core::config::SamplerConfig;
///
/// let config = SamplerConfig::from_toml_str("seed = 42\nlog_level = \"debug\"").unwrap();
/// assert_eq!(config.seed, Some(42));
///
/// let rng = config.build_rng();
/// assert_eq!(rng.seed(), 42);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerConfig {
    /// Explicit seed; `None` seeds from the clock
    pub seed: Option<i32>,
    /// Log level
    pub log_level: LogLevel,
}

impl SamplerConfig {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Override fields from `SAMPLER_SEED` and `SAMPLER_LOG_LEVEL`
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        if let Some(raw) = lookup(ENV_SEED) {
            let seed = raw.trim().parse::<i32>().map_err(|e| {
                ConfigError::EnvError(format!("{}={:?}: {}", ENV_SEED, raw, e))
            })?;
            self.seed = Some(seed);
        }
        if let Some(raw) = lookup(ENV_LOG_LEVEL) {
            self.log_level = raw.trim().parse()?;
        }
        Ok(self)
    }

    /// Build a generator from this configuration
    pub fn build_rng(&self) -> SamplerRng {
        match self.seed {
            Some(seed) => SamplerRng::from_seed(seed),
            None => SamplerRng::from_clock(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SamplerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = SamplerConfig::from_toml_str("").unwrap();
        assert_eq!(config, SamplerConfig::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = SamplerConfig::from_toml_str("seed = -17\nlog_level = \"warn\"\n").unwrap();
        assert_eq!(config.seed, Some(-17));
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SamplerConfig::from_toml_str("sead = 1").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = SamplerConfig::from_toml_str("log_level = \"loud\"").unwrap_err();
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_missing_file() {
        let err = SamplerConfig::from_file("/nonexistent/sampler.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileError(_)));
    }

    #[test]
    fn test_env_overrides() {
        let config = SamplerConfig::default()
            .apply_vars(vars(&[(ENV_SEED, " 99 "), (ENV_LOG_LEVEL, "TRACE")]))
            .unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.log_level, LogLevel::Trace);
    }

    #[test]
    fn test_env_bad_seed() {
        let err = SamplerConfig::default()
            .apply_vars(vars(&[(ENV_SEED, "forty-two")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));
    }

    #[test]
    fn test_build_rng_uses_seed() {
        let config = SamplerConfig {
            seed: Some(42),
            ..Default::default()
        };
        let mut rng = config.build_rng();
        assert_eq!(rng.next_int(10).unwrap(), 6);
    }

    #[test]
    fn test_env_bad_log_level() {
        let err = SamplerConfig::default()
            .apply_vars(vars(&[(ENV_LOG_LEVEL, "chatty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(ref raw) if raw == "chatty"));
    }

    #[test]
    fn test_log_level_round_trip() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            let parsed: LogLevel = level.parse().unwrap();
            assert_eq!(parsed.to_string(), level);
        }
    }
}
