use super::labeling::derive_labels;
use crate::domain::errors::DataError;
use crate::domain::market::price_record::PriceTable;
use crate::domain::ml::feature_registry::{FeatureRow, features_of};

/// Smallest clean table that still leaves one training row after both the
/// unlabeled last row and the held-out prediction row are removed.
pub const MIN_ROWS: usize = 3;

/// Model inputs for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    /// Open, High, Low, Close per training day.
    pub features: Vec<FeatureRow>,
    /// Next-day label per training day.
    pub labels: Vec<i32>,
    /// Held-out row the fitted model predicts on.
    pub latest: FeatureRow,
}

impl TrainingSet {
    /// Builds features and labels from a clean price table.
    ///
    /// With `n` rows there are `n - 1` labeled rows. The last labeled row is
    /// withheld from training and becomes `latest`, leaving `n - 2` training
    /// rows.
    pub fn from_table(table: &PriceTable) -> Result<Self, DataError> {
        if table.len() < MIN_ROWS {
            return Err(DataError::InsufficientRows {
                required: MIN_ROWS,
                found: table.len(),
            });
        }

        let mut labels = derive_labels(&table.records);
        let mut features: Vec<FeatureRow> = table
            .records
            .iter()
            .take(labels.len())
            .map(features_of)
            .collect();

        // Guarded by MIN_ROWS: at least two labeled rows exist here.
        let latest = features.pop().ok_or(DataError::InsufficientRows {
            required: MIN_ROWS,
            found: table.len(),
        })?;
        labels.pop();

        Ok(Self {
            features,
            labels,
            latest,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Distinct label values present in the training rows, ascending.
    pub fn classes(&self) -> Vec<i32> {
        let mut classes = self.labels.clone();
        classes.sort_unstable();
        classes.dedup();
        classes
    }

    pub fn class_count(&self) -> usize {
        self.classes().len()
    }
}
