//! Data directory configuration parsing from environment variables.

use super::{Lookup, parse_or};
use anyhow::{Result, bail};
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_HISTORY_WINDOW: usize = 30;

/// Location of the local stock tables
#[derive(Debug, Clone, PartialEq)]
pub struct DataEnvConfig {
    /// Root holding `stocks/<SYMBOL>.csv` and the symbol name map.
    pub data_dir: PathBuf,
    /// Rows returned by the history summary.
    pub history_window: usize,
}

impl Default for DataEnvConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }
}

impl DataEnvConfig {
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self> {
        let history_window = parse_or(lookup, "TRENDCAST_HISTORY_WINDOW", DEFAULT_HISTORY_WINDOW)?;
        if history_window == 0 {
            bail!("TRENDCAST_HISTORY_WINDOW must be at least 1");
        }

        Ok(Self {
            data_dir: lookup("TRENDCAST_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            history_window,
        })
    }
}
