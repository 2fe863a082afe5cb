//! Configuration module for Trendcast.
//!
//! Values come from built-in defaults, then environment variables (a `.env`
//! file is honored by the binaries), then command-line arguments.

mod data_config;
mod prediction_config;

pub use data_config::{DEFAULT_DATA_DIR, DEFAULT_HISTORY_WINDOW, DataEnvConfig};
pub use prediction_config::{DEFAULT_CSV_PATH, DEFAULT_MODEL_TYPE, DEFAULT_SEED, PredictionConfig};

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Source of configuration values, keyed by environment variable name.
pub type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub prediction: PredictionConfig,
    pub data: DataEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self> {
        let prediction =
            PredictionConfig::from_lookup(lookup).context("Failed to load prediction config")?;
        let data = DataEnvConfig::from_lookup(lookup).context("Failed to load data config")?;

        Ok(Self { prediction, data })
    }
}

fn parse_or<T>(lookup: &Lookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .context(format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}
