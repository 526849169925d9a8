use clap::Args;
use serde_json::Value;

use bankstress_core::validation;

use crate::input;

#[derive(Args)]
pub struct ValidateArgs {
    /// Statement CSV to check
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = input::load_rows(args.input.as_deref())?;
    let result = validation::validate_rows(&rows);
    Ok(serde_json::to_value(result)?)
}
