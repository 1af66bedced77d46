//! # Tally Core
//!
//! Core library for Tally - a small, file-backed personal bookkeeping ledger.
//!
//! This crate provides the domain model, the ledger operations, and the
//! storage backend independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **transaction**: Transaction values, kinds, filters, and date parsing
//! - **ledger**: Append-only ledger with add/list/balance/summary
//! - **summary**: Per-category aggregation of signed amounts
//! - **storage**: Storage backend trait and the JSON file implementation
//! - **money**: Decimal rounding rules

pub mod error;
pub mod fs;
pub mod ledger;
pub mod money;
pub mod storage;
pub mod summary;
pub mod transaction;

pub use error::{Result, TallyError};
pub use ledger::Ledger;
pub use storage::{JsonFileStore, TransactionStore};
pub use summary::{summarize, CategorySummary};
pub use transaction::{NewTransaction, Transaction, TransactionFilter, TransactionKind};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
