use serde_json::json;
use std::fs;
use tempfile::TempDir;
use trendcast::application::market_data::{catalog, history};
use trendcast::domain::errors::DataError;
use trendcast::infrastructure::csv_loader;
use trendcast::infrastructure::stock_files::StockDirectory;

fn data_dir() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    let stocks = dir.path().join("stocks");
    fs::create_dir(&stocks)?;

    let mut contents = String::from("Date,Symbol,Series,Prev Close,Open,High,Low,Last,Close,VWAP,Volume\n");
    for day in 1..=40 {
        let close = 2000.0 + day as f64;
        contents.push_str(&format!(
            "2024-02-{:02},RELIANCE,EQ,{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{}\n",
            (day - 1) % 28 + 1,
            close - 1.0,
            close - 0.5,
            close + 3.0,
            close - 3.0,
            close,
            close,
            close + 0.25,
            10_000 + day
        ));
    }
    fs::write(stocks.join("RELIANCE.csv"), contents)?;
    fs::write(stocks.join("TCS.csv"), "Date,Open,High,Low,Close\n")?;
    fs::write(
        dir.path().join("NSE Symbols.CSV"),
        "Scrip,Company Name\nRELIANCE,Reliance Industries Limited\n",
    )?;
    Ok(dir)
}

#[test]
fn test_history_for_symbol() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let directory = StockDirectory::new(dir.path());

    let table = csv_loader::read_table(&directory.csv_path("RELIANCE")?)?;
    let summary = history::summarize(&table, 30)?;

    assert_eq!(summary.data.len(), 30);
    assert_eq!(summary.data[0]["Close"], json!(2040.0));
    assert_eq!(summary.data[29]["Close"], json!(2011.0));
    assert_eq!(summary.data[0]["Volume"], json!(10_040));
    assert_eq!(summary.data[0]["Series"], json!("EQ"));
    assert_eq!(summary.data[0]["VWAP"], json!(2040.25));

    let info = serde_json::to_value(&summary.info)?;
    assert_eq!(info["latestClose"], json!(2040.0));
    assert_eq!(info["volume"], json!(10_040));
    // (2040 - 2039) / 2039 * 100 = 0.049...
    assert_eq!(info["dayChange"], json!(0.05));
    Ok(())
}

#[test]
fn test_history_unknown_symbol() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let directory = StockDirectory::new(dir.path());

    let err = csv_loader::read_table(&directory.csv_path("NOPE")?).unwrap_err();
    assert!(matches!(err, DataError::NotFound { .. }));
    Ok(())
}

#[test]
fn test_history_of_empty_table() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let directory = StockDirectory::new(dir.path());

    let table = csv_loader::read_table(&directory.csv_path("TCS")?)?;
    assert!(history::summarize(&table, 30).is_err());
    Ok(())
}

#[test]
fn test_catalog_listing() -> anyhow::Result<()> {
    let dir = data_dir()?;
    let directory = StockDirectory::new(dir.path());

    let plain = serde_json::to_value(catalog::list_stocks(&directory)?)?;
    assert_eq!(plain, json!({"stocks": ["RELIANCE", "TCS"]}));

    let named = serde_json::to_value(catalog::list_named_stocks(&directory)?)?;
    assert_eq!(named["stocks"][0]["name"], json!("Reliance Industries Limited"));
    assert_eq!(named["stocks"][1]["name"], json!(null));
    Ok(())
}
