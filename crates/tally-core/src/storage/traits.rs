//! Storage backend trait definition.
//!
//! The `TransactionStore` trait is the seam between the ledger and wherever
//! its records live. The ledger always hands over the complete sequence;
//! backends never see partial updates.

use crate::error::Result;
use crate::transaction::Transaction;

/// Persistence interface for a ledger's transactions.
///
/// All implementations must ensure:
/// - `load` returns records in the order they were saved
/// - `save` replaces the stored sequence as a whole
/// - A location that was never written loads as empty
pub trait TransactionStore {
    /// Load every stored transaction.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Deserialization` if the stored content cannot be
    /// read or does not reconstruct into transactions.
    fn load(&self) -> Result<Vec<Transaction>>;

    /// Replace the stored sequence with `transactions`.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::StorageWrite` if the write fails.
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
}
