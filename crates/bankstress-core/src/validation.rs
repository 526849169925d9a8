//! Schema validation for uploaded statement rows.
//!
//! This is the single entry gate in front of the calculators and the
//! stress engine: a row set that fails here must never be promoted to a
//! typed series. Checks are fail-fast and run in a fixed order:
//!
//! 1. Non-empty row set.
//! 2. Field presence, checked against the first row only (a dataset whose
//!    later rows drop fields is presence-valid; known limitation kept for
//!    compatibility with the upstream file format).
//! 3. Per row: every field except `date` is a non-negative number.
//! 4. Per row: `date` matches `YYYY-MM-DD` and is a real calendar date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::BankStressError;
use crate::BankStressResult;

/// The required CSV column schema. Names are exact and case-sensitive.
pub const REQUIRED_FIELDS: [&str; 13] = [
    "date",
    "netIncome",
    "totalAssets",
    "shareholderEquity",
    "netInterestIncome",
    "earningAssets",
    "totalLoans",
    "totalDeposits",
    "nonPerformingLoans",
    "highQualityAssets",
    "totalNetCashOutflows",
    "totalCapital",
    "riskWeightedAssets",
];

/// Boundary form of the validation outcome. Never panics, never throws
/// across the engine boundary; `error` carries the rendered message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

/// Validate a parsed row set and report the outcome as a structured result.
pub fn validate_rows(rows: &[Value]) -> ValidationResult {
    match validate(rows) {
        Ok(()) => ValidationResult {
            is_valid: true,
            error: None,
        },
        Err(e) => ValidationResult {
            is_valid: false,
            error: Some(e.to_string()),
        },
    }
}

/// Typed form of the same check. Stops at the first violation.
pub fn validate(rows: &[Value]) -> BankStressResult<()> {
    let first = match rows.first() {
        Some(Value::Object(map)) => map,
        _ => return Err(BankStressError::EmptyInput),
    };

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !first.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(BankStressError::MissingFields {
            missing,
            expected: REQUIRED_FIELDS.iter().map(|f| f.to_string()).collect(),
            found: first.keys().cloned().collect(),
        });
    }

    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        let map = match row.as_object() {
            Some(map) => map,
            None => return Err(BankStressError::EmptyInput),
        };

        for field in REQUIRED_FIELDS {
            if field == "date" {
                continue;
            }
            let valid = matches!(
                map.get(field),
                Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v.is_finite() && v >= 0.0)
            );
            if !valid {
                return Err(BankStressError::InvalidNumericValue {
                    row: row_number,
                    field: field.to_string(),
                });
            }
        }

        let date_ok = map
            .get("date")
            .and_then(Value::as_str)
            .and_then(parse_date)
            .is_some();
        if !date_ok {
            return Err(BankStressError::InvalidDateFormat { row: row_number });
        }
    }

    Ok(())
}

/// Parse a date that matches the strict `YYYY-MM-DD` shape (4 digits,
/// dash, 2 digits, dash, 2 digits) and is a real calendar date.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_row() -> Value {
        json!({
            "date": "2024-03-31",
            "netIncome": 1_000_000,
            "totalAssets": 20_000_000,
            "shareholderEquity": 8_000_000,
            "netInterestIncome": 1_500_000,
            "earningAssets": 18_000_000,
            "totalLoans": 12_000_000,
            "totalDeposits": 15_000_000,
            "nonPerformingLoans": 600_000,
            "highQualityAssets": 3_000_000,
            "totalNetCashOutflows": 2_500_000,
            "totalCapital": 2_000_000,
            "riskWeightedAssets": 15_000_000
        })
    }

    #[test]
    fn test_valid_rows_pass() {
        let result = validate_rows(&[valid_row(), valid_row()]);
        assert!(result.is_valid);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(validate(&[]), Err(BankStressError::EmptyInput)));
    }

    #[test]
    fn test_non_object_rows_rejected() {
        assert!(matches!(
            validate(&[json!("not a row")]),
            Err(BankStressError::EmptyInput)
        ));
    }

    #[test]
    fn test_missing_fields_named_exactly() {
        let mut row = valid_row();
        let map = row.as_object_mut().unwrap();
        map.remove("totalCapital");
        map.remove("earningAssets");

        match validate(&[row]) {
            Err(BankStressError::MissingFields {
                missing, expected, ..
            }) => {
                assert_eq!(missing, vec!["earningAssets", "totalCapital"]);
                assert_eq!(expected.len(), 13);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_presence_checked_on_first_row_only() {
        let mut second = valid_row();
        second.as_object_mut().unwrap().remove("totalCapital");
        // Second row's absent field shows up as an invalid value, not as
        // a missing field.
        match validate(&[valid_row(), second]) {
            Err(BankStressError::InvalidNumericValue { row, field }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "totalCapital");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_negative_value_cites_row_and_field() {
        let mut bad = valid_row();
        bad["nonPerformingLoans"] = json!(-1);
        match validate(&[valid_row(), valid_row(), bad]) {
            Err(BankStressError::InvalidNumericValue { row, field }) => {
                assert_eq!(row, 3);
                assert_eq!(field, "nonPerformingLoans");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let mut bad = valid_row();
        bad["totalAssets"] = json!("lots");
        match validate(&[bad]) {
            Err(BankStressError::InvalidNumericValue { row, field }) => {
                assert_eq!(row, 1);
                assert_eq!(field, "totalAssets");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_short_circuits_at_first_violation() {
        let mut first_bad = valid_row();
        first_bad["netIncome"] = json!(-1);
        let mut second_bad = valid_row();
        second_bad["date"] = json!("31/03/2024");

        match validate(&[first_bad, second_bad]) {
            Err(BankStressError::InvalidNumericValue { row, .. }) => assert_eq!(row, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_date_cites_row() {
        let mut bad = valid_row();
        bad["date"] = json!("2024-3-31");
        match validate(&[valid_row(), bad]) {
            Err(BankStressError::InvalidDateFormat { row }) => assert_eq!(row, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_impossible_calendar_date_rejected() {
        let mut bad = valid_row();
        bad["date"] = json!("2023-02-29");
        assert!(matches!(
            validate(&[bad]),
            Err(BankStressError::InvalidDateFormat { row: 1 })
        ));
    }

    #[test]
    fn test_leap_day_accepted() {
        let mut row = valid_row();
        row["date"] = json!("2024-02-29");
        assert!(validate_rows(&[row]).is_valid);
    }

    #[test]
    fn test_zero_values_are_valid_input() {
        let mut row = valid_row();
        row["totalLoans"] = json!(0);
        assert!(validate_rows(&[row]).is_valid);
    }

    #[test]
    fn test_result_message_lists_fields() {
        let mut row = valid_row();
        row.as_object_mut().unwrap().remove("date");
        let result = validate_rows(&[row]);
        assert!(!result.is_valid);
        let message = result.error.unwrap();
        assert!(message.contains("Missing required fields: date"));
        assert!(message.contains("Expected fields:"));
        assert!(message.contains("Found fields:"));
    }
}
