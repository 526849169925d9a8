use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::error::BankStressError;
use crate::validation;
use crate::BankStressResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Percentages expressed in percent units (20 = 20%). Never as decimals.
pub type Percent = Decimal;

/// One reporting-period snapshot of a bank's financial statement.
///
/// Field names serialize in camelCase to match the CSV column schema
/// exactly, so records are directly exportable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub date: NaiveDate,
    pub net_income: Money,
    pub total_assets: Money,
    pub shareholder_equity: Money,
    pub net_interest_income: Money,
    pub earning_assets: Money,
    pub total_loans: Money,
    pub total_deposits: Money,
    pub non_performing_loans: Money,
    pub high_quality_assets: Money,
    pub total_net_cash_outflows: Money,
    pub total_capital: Money,
    pub risk_weighted_assets: Money,
}

/// A percentage ratio rounded to two decimal places, or a marker that the
/// ratio could not be derived (zero divisor in the underlying fields).
///
/// Serializes untagged: a computable ratio becomes its decimal value and
/// `NotComputable` becomes `null`, keeping exported rows flat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ratio {
    Computable(Decimal),
    NotComputable,
}

impl Ratio {
    /// `numerator / denominator * 100`, rounded half-up to 2 decimals.
    pub fn pct(numerator: Decimal, denominator: Decimal) -> Ratio {
        if denominator.is_zero() {
            Ratio::NotComputable
        } else {
            Ratio::Computable(round2(numerator / denominator * dec!(100)))
        }
    }

    /// `self - other`; `NotComputable` if either side is.
    pub fn delta(self, other: Ratio) -> Ratio {
        match (self, other) {
            (Ratio::Computable(a), Ratio::Computable(b)) => Ratio::Computable(round2(a - b)),
            _ => Ratio::NotComputable,
        }
    }

    pub fn value(self) -> Option<Decimal> {
        match self {
            Ratio::Computable(v) => Some(v),
            Ratio::NotComputable => None,
        }
    }

    pub fn is_computable(self) -> bool {
        matches!(self, Ratio::Computable(_))
    }
}

impl std::fmt::Display for Ratio {
    /// `NotComputable` renders as "0.00", the legacy dashboard sentinel.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ratio::Computable(v) => write!(f, "{:.2}", v),
            Ratio::NotComputable => write!(f, "0.00"),
        }
    }
}

/// Round to 2 decimal places, half away from zero. The result carries a
/// scale of exactly 2 so ratios always serialize as e.g. "10.00".
pub(crate) fn round2(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

/// Materialize a validated, untyped row set into typed records.
///
/// Numeric strings are accepted as numbers, mirroring the type inference
/// the CSV boundary applies. Row numbers in errors are 1-based.
pub fn series_from_rows(rows: &[Value]) -> BankStressResult<Vec<FinancialRecord>> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| record_from_row(row, i + 1))
        .collect()
}

fn record_from_row(row: &Value, row_number: usize) -> BankStressResult<FinancialRecord> {
    let map = row
        .as_object()
        .ok_or(BankStressError::EmptyInput)?;

    let date_str = map
        .get("date")
        .and_then(Value::as_str)
        .ok_or(BankStressError::InvalidDateFormat { row: row_number })?;
    let date = validation::parse_date(date_str)
        .ok_or(BankStressError::InvalidDateFormat { row: row_number })?;

    let field = |name: &str| -> BankStressResult<Money> {
        let value = map.get(name).ok_or_else(|| BankStressError::MissingFields {
            missing: vec![name.to_string()],
            expected: validation::REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
            found: map.keys().cloned().collect(),
        })?;
        money_value(value).ok_or_else(|| BankStressError::InvalidNumericValue {
            row: row_number,
            field: name.to_string(),
        })
    };

    Ok(FinancialRecord {
        date,
        net_income: field("netIncome")?,
        total_assets: field("totalAssets")?,
        shareholder_equity: field("shareholderEquity")?,
        net_interest_income: field("netInterestIncome")?,
        earning_assets: field("earningAssets")?,
        total_loans: field("totalLoans")?,
        total_deposits: field("totalDeposits")?,
        non_performing_loans: field("nonPerformingLoans")?,
        high_quality_assets: field("highQualityAssets")?,
        total_net_cash_outflows: field("totalNetCashOutflows")?,
        total_capital: field("totalCapital")?,
        risk_weighted_assets: field("riskWeightedAssets")?,
    })
}

fn money_value(value: &Value) -> Option<Money> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };
    let parsed = Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()?;
    (parsed >= Decimal::ZERO).then_some(parsed)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
