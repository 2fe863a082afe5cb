use crate::domain::errors::DataError;
use crate::infrastructure::stock_files::StockDirectory;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockList {
    pub stocks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockEntry {
    pub symbol: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedStockList {
    pub stocks: Vec<StockEntry>,
}

pub fn list_stocks(directory: &StockDirectory) -> Result<StockList, DataError> {
    Ok(StockList {
        stocks: directory.list_symbols()?,
    })
}

/// Available symbols joined with their company names, when known.
pub fn list_named_stocks(directory: &StockDirectory) -> Result<NamedStockList, DataError> {
    let mut names = directory.company_names()?;
    let stocks = directory
        .list_symbols()?
        .into_iter()
        .map(|symbol| StockEntry {
            name: names.remove(&symbol),
            symbol,
        })
        .collect();

    Ok(NamedStockList { stocks })
}
