use super::dataset::TrainingSet;
use super::predictor::{ClassifierTrainer, TrendClassifier};
use crate::domain::errors::ModelError;
use crate::domain::ml::feature_registry::{FEATURE_COUNT, FeatureRow, rows_to_f64_vectors};
use crate::domain::ml::model_kind::ModelKind;
use crate::domain::ml::trend::Trend;
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::svm::Kernels;
use smartcore::svm::svc::{SVC, SVCParameters};
use statrs::statistics::Statistics;
use tracing::debug;

type Matrix = DenseMatrix<f64>;
type Labels = Vec<i32>;
type SvcParameters = SVCParameters<f64, i32, Matrix, Labels>;

/// Constructs the untrained classifier for `kind`.
pub fn trainer_for(kind: ModelKind, seed: u64) -> Box<dyn ClassifierTrainer> {
    match kind {
        ModelKind::Svm => Box::new(SvmTrainer::new()),
        ModelKind::RandomForest => Box::new(RandomForestTrainer::new(seed)),
    }
}

fn to_matrix(rows: &[FeatureRow]) -> Result<Matrix, ModelError> {
    DenseMatrix::from_2d_vec(&rows_to_f64_vectors(rows)).map_err(|e| ModelError::Matrix {
        reason: e.to_string(),
    })
}

fn first_trend<T: Copy + Into<f64>>(
    model: ModelKind,
    predictions: &[T],
) -> Result<Trend, ModelError> {
    let class = predictions
        .first()
        .copied()
        .ok_or(ModelError::EmptyPrediction { model })?;
    Trend::from_class(class.into())
}

/// Repeats the whole training set until it has at least `FEATURE_COUNT` rows.
///
/// smartcore's SVC panics at prediction time when it was fit on fewer rows
/// than columns. Whole-set repetition keeps every row equally weighted.
fn pad_rows(features: &[FeatureRow], labels: &[i32]) -> (Vec<FeatureRow>, Vec<i32>) {
    if features.is_empty() || features.len() >= FEATURE_COUNT {
        return (features.to_vec(), labels.to_vec());
    }
    let copies = FEATURE_COUNT.div_ceil(features.len());
    (features.repeat(copies), labels.repeat(copies))
}

/// RBF width following the "scale" convention: `1 / (n_features * Var(X))`,
/// with the variance taken over every cell of the training matrix.
pub fn scale_gamma(rows: &[FeatureRow]) -> f64 {
    let variance = rows.iter().flatten().population_variance();
    if variance.is_finite() && variance > 0.0 {
        1.0 / (FEATURE_COUNT as f64 * variance)
    } else {
        1.0
    }
}

/// Random forest with library-default hyperparameters and a fixed seed.
pub struct RandomForestTrainer {
    seed: u64,
}

impl RandomForestTrainer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ClassifierTrainer for RandomForestTrainer {
    fn kind(&self) -> ModelKind {
        ModelKind::RandomForest
    }

    fn fit<'a>(
        &'a mut self,
        data: &TrainingSet,
    ) -> Result<Box<dyn TrendClassifier + 'a>, ModelError> {
        if let [label] = data.classes()[..] {
            debug!("Single-class training rows, predicting label {} for every input", label);
            return Ok(Box::new(ConstantModel {
                trend: Trend::from_class(label.into())?,
            }));
        }

        let x = to_matrix(&data.features)?;
        let params = RandomForestClassifierParameters::default().with_seed(self.seed);

        debug!(
            "Fitting random forest on {} rows (seed {})",
            data.len(),
            self.seed
        );
        let model = RandomForestClassifier::fit(&x, &data.labels, params).map_err(|e| {
            ModelError::Fit {
                model: ModelKind::RandomForest,
                reason: e.to_string(),
            }
        })?;

        Ok(Box::new(RandomForestModel { model }))
    }
}

/// Stands in for the forest when every training row carries the same label;
/// smartcore refuses to fit a forest on one class.
struct ConstantModel {
    trend: Trend,
}

impl TrendClassifier for ConstantModel {
    fn predict(&self, _features: &FeatureRow) -> Result<Trend, ModelError> {
        Ok(self.trend)
    }

    fn name(&self) -> &str {
        "Constant (single class)"
    }
}

struct RandomForestModel {
    model: RandomForestClassifier<f64, i32, Matrix, Labels>,
}

impl TrendClassifier for RandomForestModel {
    fn predict(&self, features: &FeatureRow) -> Result<Trend, ModelError> {
        let x = to_matrix(std::slice::from_ref(features))?;
        let predictions: Labels = self.model.predict(&x).map_err(|e| ModelError::Predict {
            model: ModelKind::RandomForest,
            reason: e.to_string(),
        })?;
        first_trend(ModelKind::RandomForest, &predictions)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}

/// Support-vector classifier: RBF kernel, C = 1, scaled gamma.
///
/// The fitted SVC borrows its parameters, so the trainer keeps the fit inputs
/// alive for as long as the returned model is in use.
#[derive(Default)]
pub struct SvmTrainer {
    state: Option<SvmFitState>,
}

struct SvmFitState {
    x: Matrix,
    y: Labels,
    params: SvcParameters,
}

impl SvmTrainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClassifierTrainer for SvmTrainer {
    fn kind(&self) -> ModelKind {
        ModelKind::Svm
    }

    fn fit<'a>(
        &'a mut self,
        data: &TrainingSet,
    ) -> Result<Box<dyn TrendClassifier + 'a>, ModelError> {
        if data.class_count() < 2 {
            return Err(ModelError::Fit {
                model: ModelKind::Svm,
                reason: format!(
                    "training rows must contain both UP and DOWN days, found {} class(es)",
                    data.class_count()
                ),
            });
        }

        let gamma = scale_gamma(&data.features);
        let (features, labels) = pad_rows(&data.features, &data.labels);
        debug!(
            "Fitting SVM on {} rows ({} after padding, gamma {:.6})",
            data.len(),
            features.len(),
            gamma
        );

        let state: &'a SvmFitState = self.state.insert(SvmFitState {
            x: to_matrix(&features)?,
            // SVC expects signed classes
            y: labels
                .iter()
                .map(|&label| if label == 1 { 1 } else { -1 })
                .collect(),
            params: SVCParameters::default()
                .with_c(1.0)
                .with_kernel(Kernels::rbf().with_gamma(gamma)),
        });

        let model = SVC::fit(&state.x, &state.y, &state.params).map_err(|e| ModelError::Fit {
            model: ModelKind::Svm,
            reason: e.to_string(),
        })?;

        Ok(Box::new(SvmModel { model }))
    }
}

struct SvmModel<'a> {
    model: SVC<'a, f64, i32, Matrix, Labels>,
}

impl TrendClassifier for SvmModel<'_> {
    fn predict(&self, features: &FeatureRow) -> Result<Trend, ModelError> {
        let x = to_matrix(std::slice::from_ref(features))?;
        let predictions = self.model.predict(&x).map_err(|e| ModelError::Predict {
            model: ModelKind::Svm,
            reason: e.to_string(),
        })?;
        first_trend(ModelKind::Svm, &predictions)
    }

    fn name(&self) -> &str {
        "SmartCore SVC"
    }
}
