use crate::domain::errors::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the next day's close relative to today's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Binary training label: 1 for a higher next close, 0 otherwise.
    pub fn label(&self) -> i32 {
        match self {
            Trend::Up => 1,
            Trend::Down => 0,
        }
    }

    /// Maps a predicted class back to a trend. Accepts both the `{0, 1}`
    /// encoding and the signed `{-1, 1}` encoding used by the SVM.
    pub fn from_class(class: f64) -> Result<Self, ModelError> {
        if class == 1.0 {
            Ok(Trend::Up)
        } else if class == 0.0 || class == -1.0 {
            Ok(Trend::Down)
        } else {
            Err(ModelError::UnexpectedLabel { label: class })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "UP",
            Trend::Down => "DOWN",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result record written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub trend: Trend,
}

impl TrendPrediction {
    pub fn new(trend: Trend) -> Self {
        Self { trend }
    }
}
