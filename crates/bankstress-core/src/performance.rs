//! Profitability ratios derived from a single reporting period.
//!
//! Covers:
//! 1. **ROA** -- net income / total assets.
//! 2. **ROE** -- net income / shareholder equity.
//! 3. **NIM** -- net interest income / earning assets.
//!
//! All three are percentages rounded to 2 decimal places. A zero divisor
//! yields [`Ratio::NotComputable`] rather than a panic, so one malformed
//! record never aborts a whole-series report.

use serde::{Deserialize, Serialize};

use crate::types::{FinancialRecord, Ratio};

/// Performance metrics for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Return on assets (%).
    pub roa: Ratio,
    /// Return on equity (%).
    pub roe: Ratio,
    /// Net interest margin (%).
    pub nim: Ratio,
}

/// Derive performance metrics from raw statement fields. Pure and total
/// over well-formed records.
pub fn performance_metrics(record: &FinancialRecord) -> PerformanceMetrics {
    PerformanceMetrics {
        roa: Ratio::pct(record.net_income, record.total_assets),
        roe: Ratio::pct(record.net_income, record.shareholder_equity),
        nim: Ratio::pct(record.net_interest_income, record.earning_assets),
    }
}
