use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use bankstress_core::stress::{self, StressParameters};
use bankstress_core::types::series_from_rows;
use bankstress_core::validation;

use crate::input;

#[derive(Args)]
pub struct StressArgs {
    /// Baseline statement CSV
    #[arg(long)]
    pub input: Option<String>,

    /// Interest rate shock in percentage points
    #[arg(long, default_value = "2.0")]
    pub interest_rate_shock: Decimal,

    /// Market value decline applied to total assets (%)
    #[arg(long, default_value = "20")]
    pub market_decline: Decimal,

    /// Increase in non-performing loans (%)
    #[arg(long, default_value = "50")]
    pub npl_increase: Decimal,

    /// Sudden deposit withdrawal (%)
    #[arg(long, default_value = "15")]
    pub deposit_withdrawal: Decimal,
}

pub fn run_stress(args: StressArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = input::load_rows(args.input.as_deref())?;
    validation::validate(&rows)?;

    let baseline = series_from_rows(&rows)?;
    let params = StressParameters {
        interest_rate_shock: args.interest_rate_shock,
        market_decline: args.market_decline,
        npl_increase: args.npl_increase,
        deposit_withdrawal: args.deposit_withdrawal,
    };

    let result = stress::run_stress_test(&baseline, &params)?;
    Ok(serde_json::to_value(result)?)
}
