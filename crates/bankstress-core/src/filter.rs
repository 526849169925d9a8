//! Time-range selection over a chronologically ordered record series.
//!
//! The reference date ("today") is injected by the caller so filtering
//! stays a pure function; the host supplies the real clock at the
//! boundary. Filtering preserves relative order and never mutates the
//! source series.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BankStressError;
use crate::types::FinancialRecord;

/// The relative windows the dashboard exposes, in days.
pub const SUPPORTED_WINDOWS: [u32; 4] = [30, 90, 180, 365];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeRange {
    /// The full series, unchanged.
    All,
    /// Records on or after January 1 of the reference year.
    YearToDate,
    /// Records within the trailing N days of the reference date.
    Days(u32),
}

impl FromStr for TimeRange {
    type Err = BankStressError;

    /// Accepts `all`, `ytd`, or one of the supported day windows. Any
    /// other value is rejected rather than silently widened to `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TimeRange::All),
            "ytd" => Ok(TimeRange::YearToDate),
            other => match other.parse::<u32>() {
                Ok(days) if SUPPORTED_WINDOWS.contains(&days) => Ok(TimeRange::Days(days)),
                _ => Err(BankStressError::UnsupportedRange(s.to_string())),
            },
        }
    }
}

impl TimeRange {
    /// The inclusive cutoff date for this range, or `None` for `All`.
    fn cutoff(self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            TimeRange::All => None,
            TimeRange::YearToDate => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            TimeRange::Days(n) => today.checked_sub_days(Days::new(u64::from(n))),
        }
    }
}

/// Select the records with `date >= cutoff`, keeping the original order.
/// Returns a fresh sequence; the source series is untouched.
pub fn filter_series(
    series: &[FinancialRecord],
    range: TimeRange,
    today: NaiveDate,
) -> Vec<FinancialRecord> {
    match range.cutoff(today) {
        None => series.to_vec(),
        Some(cutoff) => series
            .iter()
            .filter(|record| record.date >= cutoff)
            .cloned()
            .collect(),
    }
}
