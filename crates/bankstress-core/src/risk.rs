//! Risk ratios and regulatory breach flags for a single reporting period.
//!
//! Covers:
//! 1. **NPL ratio** -- non-performing loans / total loans; flagged above 5%.
//! 2. **LCR** -- high-quality liquid assets / net cash outflows; flagged
//!    below 100%.
//! 3. **CAR** -- total capital / risk-weighted assets; flagged below 8%.
//!
//! Flag thresholds are strict inequalities: a ratio sitting exactly on a
//! threshold is not a breach. A ratio that cannot be derived is never
//! flagged; the `NotComputable` marker is the anomaly signal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{FinancialRecord, Ratio};

/// NPL ratio above this is flagged.
pub const NPL_ALERT_THRESHOLD: Decimal = dec!(5);
/// LCR below this is flagged.
pub const LCR_MINIMUM: Decimal = dec!(100);
/// CAR below this is flagged.
pub const CAR_MINIMUM: Decimal = dec!(8);

/// Risk metrics for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    /// Non-performing loans ratio (%).
    pub npl_ratio: Ratio,
    /// Liquidity coverage ratio (%).
    pub lcr: Ratio,
    /// Capital adequacy ratio (%).
    pub car: Ratio,
}

/// Breach flags derived from [`RiskMetrics`], consumed by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFlags {
    pub high_npl: bool,
    pub low_lcr: bool,
    pub low_car: bool,
}

/// Derive risk metrics from raw statement fields. Pure and total over
/// well-formed records; zero divisors yield `NotComputable`.
pub fn risk_metrics(record: &FinancialRecord) -> RiskMetrics {
    RiskMetrics {
        npl_ratio: Ratio::pct(record.non_performing_loans, record.total_loans),
        lcr: Ratio::pct(record.high_quality_assets, record.total_net_cash_outflows),
        car: Ratio::pct(record.total_capital, record.risk_weighted_assets),
    }
}

/// Evaluate breach flags against the fixed regulatory thresholds.
pub fn risk_flags(metrics: &RiskMetrics) -> RiskFlags {
    RiskFlags {
        high_npl: metrics
            .npl_ratio
            .value()
            .is_some_and(|v| v > NPL_ALERT_THRESHOLD),
        low_lcr: metrics.lcr.value().is_some_and(|v| v < LCR_MINIMUM),
        low_car: metrics.car.value().is_some_and(|v| v < CAR_MINIMUM),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample_record() -> FinancialRecord {
        FinancialRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            net_income: dec!(1_000_000),
            total_assets: dec!(20_000_000),
            shareholder_equity: dec!(8_000_000),
            net_interest_income: dec!(1_500_000),
            earning_assets: dec!(18_000_000),
            total_loans: dec!(12_000_000),
            total_deposits: dec!(15_000_000),
            non_performing_loans: dec!(600_000),
            high_quality_assets: dec!(3_000_000),
            total_net_cash_outflows: dec!(2_500_000),
            total_capital: dec!(2_000_000),
            risk_weighted_assets: dec!(15_000_000),
        }
    }

    #[test]
    fn test_npl_ratio_at_threshold_not_flagged() {
        // 600,000 / 12,000,000 * 100 = exactly 5.00
        let metrics = risk_metrics(&sample_record());
        assert_eq!(metrics.npl_ratio, Ratio::Computable(dec!(5.00)));
        assert!(!risk_flags(&metrics).high_npl);
    }

    #[test]
    fn test_npl_ratio_above_threshold_flagged() {
        let mut record = sample_record();
        record.non_performing_loans = dec!(601_000);
        let metrics = risk_metrics(&record);
        assert!(risk_flags(&metrics).high_npl);
    }

    #[test]
    fn test_lcr_healthy_not_flagged() {
        // 3,000,000 / 2,500,000 * 100 = 120.00
        let metrics = risk_metrics(&sample_record());
        assert_eq!(metrics.lcr, Ratio::Computable(dec!(120.00)));
        assert!(!risk_flags(&metrics).low_lcr);
    }

    #[test]
    fn test_lcr_at_100_not_flagged() {
        let mut record = sample_record();
        record.high_quality_assets = dec!(2_500_000);
        let metrics = risk_metrics(&record);
        assert_eq!(metrics.lcr, Ratio::Computable(dec!(100.00)));
        assert!(!risk_flags(&metrics).low_lcr);
    }

    #[test]
    fn test_lcr_below_100_flagged() {
        let mut record = sample_record();
        record.high_quality_assets = dec!(2_400_000);
        assert!(risk_flags(&risk_metrics(&record)).low_lcr);
    }

    #[test]
    fn test_car_value() {
        // 2,000,000 / 15,000,000 * 100 = 13.333... -> 13.33
        let metrics = risk_metrics(&sample_record());
        assert_eq!(metrics.car, Ratio::Computable(dec!(13.33)));
        assert!(!risk_flags(&metrics).low_car);
    }

    #[test]
    fn test_car_at_8_not_flagged() {
        let mut record = sample_record();
        record.total_capital = dec!(1_200_000);
        let metrics = risk_metrics(&record);
        assert_eq!(metrics.car, Ratio::Computable(dec!(8.00)));
        assert!(!risk_flags(&metrics).low_car);
    }

    #[test]
    fn test_car_below_8_flagged() {
        let mut record = sample_record();
        record.total_capital = dec!(1_100_000);
        assert!(risk_flags(&risk_metrics(&record)).low_car);
    }

    #[test]
    fn test_zero_divisors_not_computable_and_not_flagged() {
        let mut record = sample_record();
        record.total_loans = Money::ZERO;
        record.total_net_cash_outflows = Money::ZERO;
        record.risk_weighted_assets = Money::ZERO;
        let metrics = risk_metrics(&record);
        assert_eq!(metrics.npl_ratio, Ratio::NotComputable);
        assert_eq!(metrics.lcr, Ratio::NotComputable);
        assert_eq!(metrics.car, Ratio::NotComputable);
        let flags = risk_flags(&metrics);
        assert!(!flags.high_npl);
        assert!(!flags.low_lcr);
        assert!(!flags.low_car);
    }

    #[test]
    fn test_pure_and_idempotent() {
        let record = sample_record();
        assert_eq!(risk_metrics(&record), risk_metrics(&record));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let metrics = risk_metrics(&sample_record());
        let json = serde_json::to_string(&metrics).unwrap();
        let back: RiskMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
