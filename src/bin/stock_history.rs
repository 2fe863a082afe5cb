//! Prints the most recent rows of a symbol's price table, newest first,
//! together with the latest close, volume and day change.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use trendcast::application::market_data::history;
use trendcast::config::Config;
use trendcast::infrastructure::csv_loader;
use trendcast::infrastructure::logging;
use trendcast::infrastructure::stock_files::StockDirectory;

#[derive(Parser, Debug)]
#[command(author, version, about = "Show recent price history for a symbol", long_about = None)]
struct Args {
    /// Symbol whose table lives at <data-dir>/stocks/<SYMBOL>.csv
    symbol: String,

    /// Number of most recent rows to include
    #[arg(short, long)]
    window: Option<usize>,

    /// Data root holding stocks/*.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let directory = StockDirectory::new(args.data_dir.unwrap_or(config.data.data_dir));
    let window = args.window.unwrap_or(config.data.history_window);

    let path = directory.csv_path(&args.symbol)?;
    let table = csv_loader::read_table(&path)
        .with_context(|| format!("Failed to fetch stock history for {}", args.symbol))?;
    let summary = history::summarize(&table, window)?;
    info!(
        "{}: {} rows, latest close {:?}",
        args.symbol,
        summary.data.len(),
        summary.info.latest_close
    );

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", serde_json::to_string(&summary)?);
    }
    Ok(())
}
