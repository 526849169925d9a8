use thiserror::Error;

#[derive(Debug, Error)]
pub enum BankStressError {
    #[error("The dataset appears to be empty or invalid. Please check your data.")]
    EmptyInput,

    #[error(
        "Missing required fields: {}. Expected fields: {}. Found fields: {}",
        missing.join(", "),
        expected.join(", "),
        found.join(", ")
    )]
    MissingFields {
        missing: Vec<String>,
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("Invalid value found in row {row} for field \"{field}\". Value must be a non-negative number.")]
    InvalidNumericValue { row: usize, field: String },

    #[error("Invalid date format in row {row}. Expected format: YYYY-MM-DD")]
    InvalidDateFormat { row: usize },

    #[error("Unsupported time range: {0}")]
    UnsupportedRange(String),

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BankStressError {
    fn from(e: serde_json::Error) -> Self {
        BankStressError::SerializationError(e.to_string())
    }
}
