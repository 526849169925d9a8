pub mod metrics;
pub mod stress;
pub mod validate;
