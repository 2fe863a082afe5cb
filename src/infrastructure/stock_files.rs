//! Local stock data directory.
//!
//! Layout under the data root:
//! - `stocks/<SYMBOL>.csv`: daily price history per symbol
//! - `NSE Symbols.CSV`: symbol to company name map (`Scrip`, `Company Name`)

use super::csv_loader::read_table;
use crate::domain::errors::DataError;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub const STOCKS_DIR: &str = "stocks";
pub const COMPANY_MAP_FILE: &str = "NSE Symbols.CSV";

const SYMBOL_COLUMN: &str = "Scrip";
const NAME_COLUMN: &str = "Company Name";

#[derive(Debug, Clone)]
pub struct StockDirectory {
    data_dir: PathBuf,
}

impl StockDirectory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn stocks_dir(&self) -> PathBuf {
        self.data_dir.join(STOCKS_DIR)
    }

    /// Path of the price table for `symbol`. Symbols are bare file stems.
    pub fn csv_path(&self, symbol: &str) -> Result<PathBuf, DataError> {
        let symbol = symbol.trim();
        let invalid = symbol.is_empty()
            || symbol.starts_with('.')
            || symbol.contains(['/', '\\'])
            || symbol.contains("..");
        if invalid {
            return Err(DataError::InvalidSymbol {
                symbol: symbol.to_string(),
            });
        }
        Ok(self.stocks_dir().join(format!("{}.csv", symbol)))
    }

    /// Symbols with a `.csv` table in the stocks directory, sorted.
    pub fn list_symbols(&self) -> Result<Vec<String>, DataError> {
        let dir = self.stocks_dir();
        if !dir.is_dir() {
            return Err(DataError::NotFound { path: dir });
        }

        let entries = fs::read_dir(&dir).map_err(|e| DataError::Unreadable {
            path: dir.clone(),
            reason: e.to_string(),
        })?;

        let mut symbols = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| DataError::Unreadable {
                path: dir.clone(),
                reason: e.to_string(),
            })?;
            let file_name = entry.file_name();
            if let Some(symbol) = file_name.to_str().and_then(|n| n.strip_suffix(".csv")) {
                if !symbol.is_empty() && entry.path().is_file() {
                    symbols.push(symbol.to_string());
                }
            }
        }

        symbols.sort();
        Ok(symbols)
    }

    /// Symbol to company name map.
    ///
    /// Also accepts files whose header collapsed into one quoted
    /// `"Scrip,Company Name"` cell; each row is then split on its first comma.
    pub fn company_names(&self) -> Result<BTreeMap<String, String>, DataError> {
        let table = read_table(&self.data_dir.join(COMPANY_MAP_FILE))?;
        let combined_header = format!("{},{}", SYMBOL_COLUMN, NAME_COLUMN);

        let mut names = BTreeMap::new();
        for row in &table.rows {
            let pair = match (
                table.cell(row, SYMBOL_COLUMN),
                table.cell(row, NAME_COLUMN),
            ) {
                (Some(symbol), Some(name)) => Some((symbol.to_string(), name.to_string())),
                _ => table
                    .cell(row, &combined_header)
                    .and_then(|cell| cell.split_once(','))
                    .map(|(symbol, name)| (symbol.to_string(), name.to_string())),
            };

            if let Some((symbol, name)) = pair {
                let (symbol, name) = (symbol.trim(), name.trim());
                if !symbol.is_empty() && !name.is_empty() {
                    names.insert(symbol.to_string(), name.to_string());
                }
            }
        }

        Ok(names)
    }
}
