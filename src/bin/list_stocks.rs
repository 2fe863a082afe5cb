//! Lists the symbols that have a price table under `<data-dir>/stocks`.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use trendcast::application::market_data::catalog;
use trendcast::config::Config;
use trendcast::infrastructure::logging;
use trendcast::infrastructure::stock_files::StockDirectory;

#[derive(Parser, Debug)]
#[command(author, version, about = "List locally available stock symbols", long_about = None)]
struct Args {
    /// Data root holding stocks/*.csv
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Join each symbol with its company name from the symbol map
    #[arg(long)]
    names: bool,

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

    let output = if args.names {
        let list = catalog::list_named_stocks(&directory).context("Failed to list stocks")?;
        info!("Found {} stocks", list.stocks.len());
        serde_json::to_value(list)?
    } else {
        let list = catalog::list_stocks(&directory).context("Failed to list stocks")?;
        info!("Found {} stocks", list.stocks.len());
        serde_json::to_value(list)?
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}
