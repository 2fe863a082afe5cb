//! Trend prediction pipeline.
//!
//! load table -> derive labels -> select features -> fit -> predict.
//! Every run fits a fresh model; nothing is persisted between invocations.

use super::dataset::TrainingSet;
use super::predictor::ClassifierTrainer;
use super::smartcore_predictor::trainer_for;
use crate::config::PredictionConfig;
use crate::domain::errors::PredictionError;
use crate::domain::market::price_record::PriceTable;
use crate::domain::ml::feature_registry::FEATURE_NAMES;
use crate::domain::ml::trend::TrendPrediction;
use crate::infrastructure::csv_loader;
use tracing::info;

/// Runs the pipeline on an already loaded table with the given trainer.
pub fn predict_trend(
    table: &PriceTable,
    trainer: &mut dyn ClassifierTrainer,
) -> Result<TrendPrediction, PredictionError> {
    let data = TrainingSet::from_table(table)?;
    info!(
        "Training {} on {} rows of {:?} ({} dropped for missing values)",
        trainer.kind(),
        data.len(),
        FEATURE_NAMES,
        table.dropped_rows
    );

    let model = trainer.fit(&data)?;
    let trend = model.predict(&data.latest)?;
    info!("{} predicts {}", model.name(), trend);

    Ok(TrendPrediction::new(trend))
}

/// Loads `config.csv_path` and predicts with the configured model kind.
pub fn run(config: &PredictionConfig) -> Result<TrendPrediction, PredictionError> {
    let table = csv_loader::load_price_table(&config.csv_path)?;
    let mut trainer = trainer_for(config.model_kind, config.seed);
    predict_trend(&table, trainer.as_mut())
}
