use crate::domain::market::price_record::PriceRecord;
use crate::domain::ml::trend::Trend;

/// Next-day direction labels.
///
/// `labels[i]` is 1 when `records[i + 1].close > records[i].close`, else 0.
/// The final record has no successor and therefore no label, so the output
/// is one shorter than the input.
pub fn derive_labels(records: &[PriceRecord]) -> Vec<i32> {
    records
        .windows(2)
        .map(|pair| next_day_trend(&pair[0], &pair[1]).label())
        .collect()
}

pub fn next_day_trend(today: &PriceRecord, tomorrow: &PriceRecord) -> Trend {
    if tomorrow.close > today.close {
        Trend::Up
    } else {
        Trend::Down
    }
}
