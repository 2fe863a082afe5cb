//! Trendcast - next-day trend prediction from daily OHLC history
//!
//! Fits a classifier on the instrument's history and prints one JSON line:
//! `{"trend":"UP"}` or `{"trend":"DOWN"}`.
//!
//! # Usage
//! ```sh
//! trendcast                                  # rf on ./data/stocks/RELIANCE.csv
//! trendcast svm ./data/stocks/TCS.csv
//! trendcast rf --symbol INFY --seed 7
//! ```
//!
//! # Environment Variables
//! - `TRENDCAST_MODEL_TYPE` - Default model selector (default: rf)
//! - `TRENDCAST_CSV_PATH` - Default input table
//! - `TRENDCAST_DATA_DIR` - Root used by `--symbol` (default: ./data)
//! - `TRENDCAST_SEED` - Random forest seed (default: 0)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use trendcast::application::ml::pipeline;
use trendcast::config::{Config, PredictionConfig};
use trendcast::infrastructure::logging;
use trendcast::infrastructure::stock_files::StockDirectory;

#[derive(Parser, Debug)]
#[command(author, version, about = "Predict the next-day trend from daily price history", long_about = None)]
struct Args {
    /// Classifier: "svm" selects the support-vector classifier, anything else the random forest
    model_type: Option<String>,

    /// Path to the daily price CSV (needs Open, High, Low, Close columns)
    csv_path: Option<PathBuf>,

    /// Read <data-dir>/stocks/<SYMBOL>.csv; takes precedence over csv_path
    #[arg(long)]
    symbol: Option<String>,

    /// Data root used to resolve --symbol
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Random forest seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let prediction = apply_args(args, Config::from_env()?)?;

    info!(
        "Predicting with model={} ({:?}) on {:?}",
        prediction.model_kind, prediction.model_type, prediction.csv_path
    );

    let result = pipeline::run(&prediction)
        .with_context(|| format!("Trend prediction failed for {:?}", prediction.csv_path))?;

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

/// Layers command-line arguments over the env-derived configuration.
fn apply_args(args: Args, config: Config) -> Result<PredictionConfig> {
    let mut prediction = config.prediction;
    if let Some(selector) = args.model_type.as_deref() {
        prediction = prediction.with_model_type(selector);
    }
    if let Some(symbol) = args.symbol.as_deref() {
        let directory = StockDirectory::new(args.data_dir.unwrap_or(config.data.data_dir));
        prediction = prediction.with_csv_path(directory.csv_path(symbol)?);
    } else if let Some(csv_path) = args.csv_path {
        prediction = prediction.with_csv_path(csv_path);
    }
    if let Some(seed) = args.seed {
        prediction = prediction.with_seed(seed);
    }
    Ok(prediction)
}
