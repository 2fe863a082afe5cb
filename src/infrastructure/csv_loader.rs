use crate::domain::errors::DataError;
use crate::domain::market::price_record::{PriceTable, RawTable};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Reads a comma-delimited file with a header row.
///
/// Rows shorter than the header are padded with empty cells (and so count as
/// missing values downstream). Rows longer than the header are malformed.
pub fn read_table(path: &Path) -> Result<RawTable, DataError> {
    if !path.is_file() {
        return Err(DataError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|e| DataError::Unreadable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let malformed = |reason: String| DataError::Malformed {
        path: path.to_path_buf(),
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| malformed(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(malformed("no columns to parse".to_string()));
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| malformed(e.to_string()))?;
        if record.len() > headers.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(malformed(format!(
                "expected {} fields in line {}, saw {}",
                headers.len(),
                line,
                record.len()
            )));
        }

        let mut row: Vec<String> = record.iter().map(str::to_string).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    debug!("Read {} rows from {:?}", rows.len(), path);
    Ok(RawTable { headers, rows })
}

/// Reads `path` and keeps only complete price rows.
pub fn load_price_table(path: &Path) -> Result<PriceTable, DataError> {
    let raw = read_table(path)?;
    let table = PriceTable::from_raw(&raw)?;
    debug!(
        "Loaded {} price rows from {:?} ({} incomplete rows dropped)",
        table.len(),
        path,
        table.dropped_rows
    );
    Ok(table)
}
