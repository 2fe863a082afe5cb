use crate::domain::market::price_record::PriceRecord;

/// Column order of the training matrix.
pub const FEATURE_NAMES: &[&str] = &["Open", "High", "Low", "Close"];

pub const FEATURE_COUNT: usize = 4;

/// One day's model input, ordered as `FEATURE_NAMES`.
pub type FeatureRow = [f64; FEATURE_COUNT];

pub fn features_of(record: &PriceRecord) -> FeatureRow {
    [record.open, record.high, record.low, record.close]
}

/// Converts feature rows into the nested vector layout matrix builders expect.
pub fn rows_to_f64_vectors(rows: &[FeatureRow]) -> Vec<Vec<f64>> {
    rows.iter().map(|row| row.to_vec()).collect()
}
