//! Deterministic stress-scenario engine.
//!
//! Covers:
//! 1. **Rate shock** -- percentage-point hit to net interest income.
//! 2. **Market decline** -- percentage hit to total assets, driving the
//!    stressed CAR.
//! 3. **NPL surge** -- percentage increase in non-performing loans,
//!    driving the stressed NPL ratio.
//! 4. **Liquidity stress** -- modeled as a fixed 20% increase in net cash
//!    outflows, independent of the deposit-withdrawal knob.
//!
//! Each run is a pure function of `(baseline, params)`: the baseline is
//! never mutated and no state is carried between runs, so the engine can
//! be re-run with different parameters against the same series.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BankStressError;
use crate::types::{with_metadata, ComputationOutput, FinancialRecord, Percent, Ratio};
use crate::BankStressResult;

/// Shock parameters. Any finite values are accepted; negative shocks act
/// as boosts. Presentation may restrict to sane ranges, the engine does
/// not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressParameters {
    /// Percentage points applied against net interest income.
    pub interest_rate_shock: Percent,
    /// Market value decline applied to total assets (%).
    pub market_decline: Percent,
    /// Increase in non-performing loans (%).
    pub npl_increase: Percent,
    /// Sudden deposit withdrawal (%). Applied to the balance sheet but
    /// not fed into any reported ratio in the current formula set.
    pub deposit_withdrawal: Percent,
}

impl Default for StressParameters {
    fn default() -> Self {
        StressParameters {
            interest_rate_shock: dec!(2.0),
            market_decline: dec!(20),
            npl_increase: dec!(50),
            deposit_withdrawal: dec!(15),
        }
    }
}

/// Baseline vs. stressed ratios for one reporting period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressedRecord {
    pub date: chrono::NaiveDate,
    #[serde(rename = "originalCAR")]
    pub original_car: Ratio,
    #[serde(rename = "stressedCAR")]
    pub stressed_car: Ratio,
    #[serde(rename = "originalNPL")]
    pub original_npl: Ratio,
    #[serde(rename = "stressedNPL")]
    pub stressed_npl: Ratio,
    #[serde(rename = "originalLCR")]
    pub original_lcr: Ratio,
    #[serde(rename = "stressedLCR")]
    pub stressed_lcr: Ratio,
}

/// Headline impact figures, taken from the most recent period only (the
/// last record of the stressed output). They do not reflect aggregate or
/// worst-case behavior across the series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressSummary {
    /// CAR reduction: original minus stressed.
    pub capital_impact: Ratio,
    /// NPL increase: stressed minus original.
    pub asset_quality_impact: Ratio,
    /// LCR reduction: original minus stressed.
    pub liquidity_impact: Ratio,
}

/// Full stress-test output: one stressed record per baseline record,
/// order-preserving, plus the last-period summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StressTestOutput {
    pub records: Vec<StressedRecord>,
    pub summary: StressSummary,
}

/// Outflow multiplier used for the stressed LCR.
const LIQUIDITY_STRESS_FACTOR: Percent = dec!(1.2);

/// Apply the shock transform to every baseline record and recompute the
/// affected ratios for both states.
pub fn run_stress_test(
    baseline: &[FinancialRecord],
    params: &StressParameters,
) -> BankStressResult<ComputationOutput<StressTestOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if baseline.is_empty() {
        return Err(BankStressError::InsufficientData(
            "At least one baseline record required".into(),
        ));
    }

    let records: Vec<StressedRecord> = baseline
        .iter()
        .map(|record| stress_record(record, params, &mut warnings))
        .collect();

    // Headline figures come from the most recent period only.
    let last = &records[records.len() - 1];
    let summary = StressSummary {
        capital_impact: last.original_car.delta(last.stressed_car),
        asset_quality_impact: last.stressed_npl.delta(last.original_npl),
        liquidity_impact: last.original_lcr.delta(last.stressed_lcr),
    };

    let output = StressTestOutput { records, summary };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Uniform Shock Stress Scenario",
        params,
        warnings,
        elapsed,
        output,
    ))
}

fn stress_record(
    record: &FinancialRecord,
    params: &StressParameters,
    warnings: &mut Vec<String>,
) -> StressedRecord {
    let hundred = dec!(100);

    // Rate shock and deposit run-off are applied to the balance sheet but
    // do not feed any of the reported ratios in the current formula set.
    let _stressed_nii =
        record.net_interest_income * (Percent::ONE - params.interest_rate_shock / hundred);
    let _stressed_deposits =
        record.total_deposits * (Percent::ONE - params.deposit_withdrawal / hundred);

    let stressed_assets = record.total_assets * (Percent::ONE - params.market_decline / hundred);
    let stressed_npl_abs =
        record.non_performing_loans * (Percent::ONE + params.npl_increase / hundred);
    let stressed_outflows = record.total_net_cash_outflows * LIQUIDITY_STRESS_FACTOR;

    let stressed = StressedRecord {
        date: record.date,
        original_car: Ratio::pct(record.total_capital, record.total_assets),
        stressed_car: Ratio::pct(record.total_capital, stressed_assets),
        original_npl: Ratio::pct(record.non_performing_loans, record.total_loans),
        stressed_npl: Ratio::pct(stressed_npl_abs, record.total_loans),
        original_lcr: Ratio::pct(record.high_quality_assets, record.total_net_cash_outflows),
        stressed_lcr: Ratio::pct(record.high_quality_assets, stressed_outflows),
    };

    if !stressed.original_car.is_computable() || !stressed.stressed_car.is_computable() {
        warnings.push(format!(
            "CAR not computable on {}: totalAssets is zero under baseline or stress",
            record.date
        ));
    }
    if !stressed.original_npl.is_computable() {
        warnings.push(format!(
            "NPL ratios not computable on {}: totalLoans is zero",
            record.date
        ));
    }
    if !stressed.original_lcr.is_computable() {
        warnings.push(format!(
            "LCR not computable on {}: totalNetCashOutflows is zero",
            record.date
        ));
    }

    stressed
}
