//! Prediction configuration parsing from environment variables.
//!
//! Holds the model selector, the input table path and the forest seed.

use super::{Lookup, parse_or};
use crate::domain::ml::model_kind::ModelKind;
use anyhow::Result;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_MODEL_TYPE: &str = "rf";
pub const DEFAULT_CSV_PATH: &str = "./data/stocks/RELIANCE.csv";
pub const DEFAULT_SEED: u64 = 0;

/// Which classifier to fit and which table to fit it on
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    /// Selector as given by the user, kept for diagnostics.
    pub model_type: String,
    pub model_kind: ModelKind,
    pub csv_path: PathBuf,
    pub seed: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            model_type: DEFAULT_MODEL_TYPE.to_string(),
            model_kind: ModelKind::default(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            seed: DEFAULT_SEED,
        }
    }
}

impl PredictionConfig {
    pub fn from_lookup(lookup: &Lookup<'_>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(selector) = lookup("TRENDCAST_MODEL_TYPE") {
            config = config.with_model_type(&selector);
        }
        if let Some(path) = lookup("TRENDCAST_CSV_PATH") {
            config.csv_path = PathBuf::from(path);
        }
        config.seed = parse_or(lookup, "TRENDCAST_SEED", DEFAULT_SEED)?;
        Ok(config)
    }

    /// Sets the selector. Unrecognized values fall back to the random forest
    /// with a warning.
    pub fn with_model_type(mut self, selector: &str) -> Self {
        if !ModelKind::is_recognized(selector) {
            warn!(
                "Unrecognized model type {:?}, falling back to random forest",
                selector
            );
        }
        self.model_type = selector.to_string();
        self.model_kind = ModelKind::from_selector(selector);
        self
    }

    pub fn with_csv_path(mut self, csv_path: impl Into<PathBuf>) -> Self {
        self.csv_path = csv_path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
