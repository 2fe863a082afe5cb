use std::fmt;
use std::str::FromStr;

/// Classifier family used to fit the trend model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    Svm,
    #[default]
    RandomForest,
}

impl ModelKind {
    /// Resolves a free-form selector. Only `"svm"` picks the support-vector
    /// classifier; every other value falls back to the random forest.
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "svm" => ModelKind::Svm,
            _ => ModelKind::RandomForest,
        }
    }

    /// True when `selector` is one of the spellings the CLI documents.
    pub fn is_recognized(selector: &str) -> bool {
        matches!(selector, "svm" | "rf")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Svm => "svm",
            ModelKind::RandomForest => "rf",
        }
    }
}

impl FromStr for ModelKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svm_selector() {
        assert_eq!(ModelKind::from_selector("svm"), ModelKind::Svm);
    }

    #[test]
    fn test_everything_else_is_random_forest() {
        for selector in ["rf", "", "randomforest", "SVM", " svm", "garbage"] {
            assert_eq!(
                ModelKind::from_selector(selector),
                ModelKind::RandomForest,
                "selector {:?}",
                selector
            );
        }
    }

    #[test]
    fn test_recognized_selectors() {
        assert!(ModelKind::is_recognized("svm"));
        assert!(ModelKind::is_recognized("rf"));
        assert!(!ModelKind::is_recognized("randomforest"));
    }

    #[test]
    fn test_default_is_random_forest() {
        assert_eq!(ModelKind::default(), ModelKind::RandomForest);
        assert_eq!(ModelKind::default().to_string(), "rf");
    }
}
