use crate::domain::ml::model_kind::ModelKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading and shaping price tables
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Stock data not found: {path:?}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path:?}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("Malformed table {path:?}: {reason}")]
    Malformed { path: PathBuf, reason: String },

    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    #[error("Row {row}: column {column} is not a number: {value:?}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Insufficient rows: need at least {required}, found {found}")]
    InsufficientRows { required: usize, found: usize },

    #[error("Invalid symbol: {symbol:?}")]
    InvalidSymbol { symbol: String },
}

/// Errors raised by classifier training and inference
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Matrix creation failed: {reason}")]
    Matrix { reason: String },

    #[error("Training failed for {model}: {reason}")]
    Fit { model: ModelKind, reason: String },

    #[error("Prediction failed for {model}: {reason}")]
    Predict { model: ModelKind, reason: String },

    #[error("No prediction returned by {model}")]
    EmptyPrediction { model: ModelKind },

    #[error("Unexpected class label: {label}")]
    UnexpectedLabel { label: f64 },
}

/// Top-level failure of a trend prediction run
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_number_formatting() {
        let error = DataError::InvalidNumber {
            row: 4,
            column: "Close".to_string(),
            value: "abc".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("Row 4"));
        assert!(msg.contains("Close"));
        assert!(msg.contains("\"abc\""));
    }

    #[test]
    fn test_model_error_names_model() {
        let error = ModelError::Fit {
            model: ModelKind::Svm,
            reason: "single class".to_string(),
        };

        let msg = error.to_string();
        assert!(msg.contains("svm"));
        assert!(msg.contains("single class"));
    }

    #[test]
    fn test_prediction_error_is_transparent() {
        let error: PredictionError = DataError::InsufficientRows {
            required: 3,
            found: 1,
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Insufficient rows: need at least 3, found 1"
        );
    }
}
