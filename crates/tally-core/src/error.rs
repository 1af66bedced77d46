//! Error types for Tally core operations.
//!
//! Errors are descriptive at the core level; the CLI layer prints them
//! as-is at the top level.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// Transaction kind is not one of the known labels
    #[error("Invalid kind: \"{0}\" (expected income or expense)")]
    InvalidKind(String),

    /// Amount is zero or negative
    #[error("Invalid amount: {0} (must be greater than zero)")]
    InvalidAmount(Decimal),

    /// Date text is not a YYYY-MM-DD calendar date
    #[error("Invalid date: \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    /// Stored ledger could not be read or reconstructed
    #[error("Failed to load ledger: {0}")]
    Deserialization(String),

    /// A running total left the representable range
    #[error("Amount total out of range: {0}")]
    AmountOverflow(String),

    /// Ledger could not be written back to storage
    #[error("Failed to write ledger: {0}")]
    StorageWrite(String),
}
