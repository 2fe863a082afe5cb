use crate::domain::errors::DataError;

/// Columns every price table must carry, in feature order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Open", "High", "Low", "Close"];

/// Cell spellings treated as a missing value.
pub const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell.trim())
}

/// Header plus untyped cells, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn cell<'a>(&'a self, row: &'a [String], name: &str) -> Option<&'a str> {
        self.column_index(name)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
    }
}

/// One trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRecord {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl PriceRecord {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
        }
    }
}

/// Complete price rows in chronological (file) order.
///
/// Any row with a missing cell, in any column, is dropped during
/// construction. Remaining rows must hold real numbers in the required columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    pub columns: Vec<String>,
    pub records: Vec<PriceRecord>,
    pub dropped_rows: usize,
}

impl PriceTable {
    pub fn from_raw(raw: &RawTable) -> Result<Self, DataError> {
        let mut indices = [0usize; 4];
        for (slot, column) in indices.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = raw
                .column_index(column)
                .ok_or_else(|| DataError::MissingColumn {
                    column: column.to_string(),
                })?;
        }

        let width = raw.headers.len();
        let mut records = Vec::with_capacity(raw.rows.len());
        let mut dropped_rows = 0;

        for (row_idx, row) in raw.rows.iter().enumerate() {
            if row.len() < width || row.iter().any(|cell| is_missing(cell)) {
                dropped_rows += 1;
                continue;
            }

            let mut values = [0.0f64; 4];
            for ((value, &col), column) in values.iter_mut().zip(&indices).zip(REQUIRED_COLUMNS) {
                *value = parse_number(&row[col]).ok_or_else(|| DataError::InvalidNumber {
                    row: row_idx + 1,
                    column: column.to_string(),
                    value: row[col].clone(),
                })?;
            }

            records.push(PriceRecord::new(values[0], values[1], values[2], values[3]));
        }

        Ok(Self {
            columns: raw.headers.clone(),
            records,
            dropped_rows,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }
}

pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_missing_markers() {
        assert!(is_missing(""));
        assert!(is_missing("  "));
        assert!(is_missing("NaN"));
        assert!(is_missing("null"));
        assert!(!is_missing("0"));
        assert!(!is_missing("RELIANCE"));
    }

    #[test]
    fn test_rows_with_any_missing_cell_are_dropped() {
        let table = PriceTable::from_raw(&raw(
            &["Date", "Open", "High", "Low", "Close", "Volume"],
            &[
                &["2024-01-01", "10", "11", "9", "10.5", "100"],
                &["2024-01-02", "", "12", "10", "11", "100"],
                &["2024-01-03", "11", "12", "10", "11.5", ""],
                &["2024-01-04", "12", "13", "11", "12.5", "100"],
            ],
        ))
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.dropped_rows, 2);
        assert_eq!(table.closes(), vec![10.5, 12.5]);
    }

    #[test]
    fn test_short_rows_are_dropped() {
        let table = PriceTable::from_raw(&raw(
            &["Open", "High", "Low", "Close", "Volume"],
            &[&["1", "2", "0.5", "1.5"], &["1", "2", "0.5", "1.5", "10"]],
        ))
        .unwrap();

        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_required_column() {
        let err = PriceTable::from_raw(&raw(&["Open", "High", "Low"], &[])).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { column } if column == "Close"));
    }

    #[test]
    fn test_non_numeric_required_value() {
        let err = PriceTable::from_raw(&raw(
            &["Open", "High", "Low", "Close"],
            &[&["1", "2", "0.5", "abc"]],
        ))
        .unwrap_err();

        assert!(matches!(err, DataError::InvalidNumber { row: 1, .. }));
    }

    #[test]
    fn test_column_order_is_by_name() {
        let table = PriceTable::from_raw(&raw(
            &["Close", "Low", "High", "Open"],
            &[&["4", "3", "2", "1"]],
        ))
        .unwrap();

        assert_eq!(table.records[0], PriceRecord::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 1.5 "), Some(1.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("x"), None);
    }
}
