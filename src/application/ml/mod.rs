pub mod dataset;
pub mod labeling;
pub mod pipeline;
pub mod predictor;
pub mod smartcore_predictor;

pub use dataset::TrainingSet;
pub use predictor::{ClassifierTrainer, TrendClassifier};
pub use smartcore_predictor::{RandomForestTrainer, SvmTrainer, trainer_for};
