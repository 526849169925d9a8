use chrono::NaiveDate;
use clap::Args;
use serde_json::Value;

use bankstress_core::filter::{self, TimeRange};
use bankstress_core::types::series_from_rows;
use bankstress_core::{performance, risk, validation};

use crate::input;

#[derive(Args)]
pub struct MetricsArgs {
    /// Statement CSV to analyze
    #[arg(long)]
    pub input: Option<String>,

    /// Time range: all, ytd, 30, 90, 180 or 365 (days)
    #[arg(long, default_value = "all")]
    pub range: String,

    /// Reference date for relative ranges (defaults to today)
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = input::load_rows(args.input.as_deref())?;
    validation::validate(&rows)?;

    let series = series_from_rows(&rows)?;
    let range: TimeRange = args.range.parse()?;
    let today = args
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let filtered = filter::filter_series(&series, range, today);
    let latest = filtered
        .last()
        .ok_or("No records fall within the selected time range")?;

    let performance = performance::performance_metrics(latest);
    let risk_metrics = risk::risk_metrics(latest);
    let flags = risk::risk_flags(&risk_metrics);

    Ok(serde_json::json!({
        "date": latest.date,
        "performance": performance,
        "risk": risk_metrics,
        "flags": flags,
    }))
}
