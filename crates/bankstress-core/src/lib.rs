pub mod error;
pub mod filter;
pub mod performance;
pub mod risk;
pub mod stress;
pub mod types;
pub mod validation;

pub use error::BankStressError;
pub use types::*;

/// Standard result type for all engine operations
pub type BankStressResult<T> = Result<T, BankStressError>;
