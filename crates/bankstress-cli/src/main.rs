mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::metrics::MetricsArgs;
use commands::stress::StressArgs;
use commands::validate::ValidateArgs;

/// Bank statement ratio analytics and stress simulation
#[derive(Parser)]
#[command(
    name = "bst",
    version,
    about = "Bank statement ratio analytics and stress simulation",
    long_about = "Validates periodic bank financial-statement CSVs, derives \
                  performance ratios (ROA, ROE, NIM) and risk ratios (NPL, LCR, CAR) \
                  with regulatory breach flags, and projects the risk ratios under \
                  parameterized stress scenarios. All arithmetic uses decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a statement CSV against the required schema
    Validate(ValidateArgs),
    /// Performance and risk ratios for the latest record in range
    Metrics(MetricsArgs),
    /// Run a stress scenario over the full baseline series
    Stress(StressArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Validate(args) => commands::validate::run_validate(args),
        Commands::Metrics(args) => commands::metrics::run_metrics(args),
        Commands::Stress(args) => commands::stress::run_stress(args),
        Commands::Version => {
            println!("bst {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
