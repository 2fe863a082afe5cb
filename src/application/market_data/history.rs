//! Recent price history summary for a single symbol.

use crate::domain::errors::DataError;
use crate::domain::market::price_record::{RawTable, is_missing, parse_number};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};

/// Columns rendered as JSON floats.
pub const FLOAT_COLUMNS: &[&str] = &["Open", "High", "Low", "Close", "VWAP"];
/// Columns rendered as JSON integers.
pub const INTEGER_COLUMNS: &[&str] = &["Volume"];
pub const DATE_COLUMN: &str = "Date";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockHistory {
    /// Most recent row first.
    pub data: Vec<Map<String, Value>>,
    pub info: HistoryInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryInfo {
    pub latest_close: Option<f64>,
    pub volume: Option<i64>,
    /// Percent change of the latest close against the previous one.
    pub day_change: Option<f64>,
}

/// Summarizes the last `window` rows of `table`, newest first.
pub fn summarize(table: &RawTable, window: usize) -> Result<StockHistory, DataError> {
    let (latest, previous) = match table.rows.as_slice() {
        [] => {
            return Err(DataError::InsufficientRows {
                required: 1,
                found: 0,
            });
        }
        [.., previous, latest] => (latest, Some(previous)),
        [latest] => (latest, None),
    };

    let start = table.rows.len().saturating_sub(window.max(1));
    let data = table.rows[start..]
        .iter()
        .rev()
        .map(|row| row_to_json(&table.headers, row))
        .collect();

    let close_of = |row: &[String]| table.cell(row, "Close").and_then(parse_number);
    let latest_close = close_of(latest.as_slice());
    let day_change = match (latest_close, previous.and_then(|row| close_of(row.as_slice()))) {
        (Some(latest), Some(previous)) if previous != 0.0 => {
            Some(round2((latest - previous) / previous * 100.0))
        }
        _ => None,
    };

    Ok(StockHistory {
        data,
        info: HistoryInfo {
            latest_close,
            volume: table.cell(latest, "Volume").and_then(parse_integer),
            day_change,
        },
    })
}

fn row_to_json(headers: &[String], row: &[String]) -> Map<String, Value> {
    headers
        .iter()
        .zip(row)
        .map(|(header, cell)| (header.clone(), cell_to_json(header, cell)))
        .collect()
}

fn cell_to_json(header: &str, cell: &str) -> Value {
    if FLOAT_COLUMNS.contains(&header) {
        return parse_number(cell).map(Value::from).unwrap_or(Value::Null);
    }
    if INTEGER_COLUMNS.contains(&header) {
        return parse_integer(cell).map(Value::from).unwrap_or(Value::Null);
    }
    if header == DATE_COLUMN && !is_missing(cell) {
        if let Some(date) = parse_date(cell) {
            return Value::String(date.format("%Y-%m-%d").to_string());
        }
    }
    Value::String(cell.to_string())
}

fn parse_integer(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| parse_number(trimmed).map(|v| v.trunc() as i64))
}

fn parse_date(cell: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(cell.trim(), format).ok())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
