use super::dataset::TrainingSet;
use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::FeatureRow;
use crate::domain::ml::model_kind::ModelKind;
use crate::domain::ml::trend::Trend;

/// A fitted classifier for next-day direction
pub trait TrendClassifier {
    /// Predict the trend for a single feature row
    fn predict(&self, features: &FeatureRow) -> Result<Trend, ModelError>;

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Builds and fits a classifier from scratch on every call.
///
/// The fitted model may borrow from the trainer, so it cannot outlive it.
pub trait ClassifierTrainer {
    fn kind(&self) -> ModelKind;

    fn fit<'a>(
        &'a mut self,
        data: &TrainingSet,
    ) -> Result<Box<dyn TrendClassifier + 'a>, ModelError>;
}
