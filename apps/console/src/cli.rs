use clap::{Parser, ValueEnum};
use krx_dashboard_core::SortDirection;

#[derive(Parser, Debug)]
#[command(name = "krx-dashboard")]
#[command(about = "KRX market data tables in the terminal", long_about = None)]
pub struct Cli {
    /// Market vertical to show
    #[arg(value_enum)]
    pub vertical: Vertical,

    /// Market code within the vertical (e.g. KOSDAQ, TREASURY, OPT_NORMAL, ETN, OIL, new-share)
    #[arg(short, long)]
    pub market: Option<String>,

    /// Trading date as YYYY-MM-DD (defaults to yesterday)
    #[arg(short, long)]
    pub date: Option<String>,

    /// 1-based page to show
    #[arg(short, long)]
    pub page: Option<usize>,

    /// Sort column, optionally with direction: `clsprc` or `clsprc:desc`
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortArg>,

    /// Item name to search for
    #[arg(long)]
    pub search: Option<String>,

    /// Match the search term anywhere in the name instead of exactly
    #[arg(long)]
    pub partial: bool,

    /// Shared view state as a query string (`market=..&date=..&page=..`);
    /// explicit flags take precedence
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    Index,
    Stock,
    Bond,
    Derivative,
    Product,
    Commodity,
    Quotation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortArg {
    pub key: String,
    pub direction: SortDirection,
}

fn parse_sort(value: &str) -> Result<SortArg, String> {
    let (key, direction) = match value.split_once(':') {
        Some((key, direction)) => (
            key,
            direction.parse::<SortDirection>().map_err(|e| e.to_string())?,
        ),
        None => (value, SortDirection::Ascending),
    };
    let key = key.trim();
    if key.is_empty() {
        return Err("sort column must not be empty".to_string());
    }
    Ok(SortArg {
        key: key.to_string(),
        direction,
    })
}
