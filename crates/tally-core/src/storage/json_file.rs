//! JSON file storage backend.
//!
//! The file holds a pretty-printed array of transaction objects:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "date": "2024-04-01",
//!     "kind": "income",
//!     "category": "salary",
//!     "description": "April salary",
//!     "amount": 100.00
//!   }
//! ]
//! ```

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tracing::debug;

use super::traits::TransactionStore;
use crate::error::{Result, TallyError};
use crate::money::checked_total;
use crate::transaction::Transaction;

/// Stores the whole ledger as one JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_error(&self, message: impl std::fmt::Display) -> TallyError {
        TallyError::Deserialization(format!("{}: {}", self.path.display(), message))
    }
}

impl TransactionStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Transaction>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "ledger file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.load_error(e)),
        };
        let transactions: Vec<Transaction> =
            serde_json::from_str(&contents).map_err(|e| self.load_error(e))?;
        validate_records(&transactions).map_err(|message| self.load_error(message))?;

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "loaded ledger"
        );
        Ok(transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(transactions)
            .map_err(|e| TallyError::StorageWrite(format!("{}: {}", self.path.display(), e)))?;
        data.push(b'\n');

        crate::fs::write_atomic(&self.path, &data)
            .map_err(|e| TallyError::StorageWrite(format!("{}: {}", self.path.display(), e)))?;

        debug!(
            path = %self.path.display(),
            count = transactions.len(),
            "saved ledger"
        );
        Ok(())
    }
}

/// Check the invariants a stored ledger must satisfy.
fn validate_records(transactions: &[Transaction]) -> std::result::Result<(), String> {
    let mut seen = HashSet::with_capacity(transactions.len());
    for transaction in transactions {
        if transaction.id == 0 {
            return Err("transaction id must be positive".to_string());
        }
        if !seen.insert(transaction.id) {
            return Err(format!("duplicate transaction id {}", transaction.id));
        }
        if transaction.amount <= Decimal::ZERO {
            return Err(format!(
                "transaction {} has non-positive amount {}",
                transaction.id, transaction.amount
            ));
        }
    }
    if checked_total(transactions.iter().map(|transaction| transaction.amount)).is_none() {
        return Err("amount totals exceed the supported range".to_string());
    }
    Ok(())
}
