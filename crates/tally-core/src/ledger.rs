//! The append-only ledger.
//!
//! A `Ledger` owns the in-memory sequence of transactions and rewrites its
//! store after every successful `add`. Records are never edited or removed.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{Result, TallyError};
use crate::money::{checked_total, round_money};
use crate::storage::{JsonFileStore, TransactionStore};
use crate::summary::{summarize, CategorySummary};
use crate::transaction::{
    parse_date, NewTransaction, Transaction, TransactionFilter, TransactionKind,
};

/// Ordered, append-only collection of transactions bound to a store.
#[derive(Debug)]
pub struct Ledger<S: TransactionStore = JsonFileStore> {
    store: S,
    transactions: Vec<Transaction>,
}

impl Ledger<JsonFileStore> {
    /// Open the JSON ledger at `path`, starting empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::Deserialization` if the file exists but cannot
    /// be reconstructed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_store(JsonFileStore::new(path))
    }
}

impl<S: TransactionStore> Ledger<S> {
    /// Bind a ledger to `store`, loading whatever it already holds.
    pub fn with_store(store: S) -> Result<Self> {
        let transactions = store.load()?;
        Ok(Self {
            store,
            transactions,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Id the next added transaction will receive.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::StorageWrite` if the highest stored id is
    /// already `u64::MAX`.
    pub fn next_id(&self) -> Result<u64> {
        match self.transactions.iter().map(|transaction| transaction.id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                TallyError::StorageWrite(format!("no transaction id left after {}", max))
            }),
        }
    }

    /// Sum of all amounts regardless of kind.
    ///
    /// While this fits in a `Decimal`, no balance or category total over
    /// any subset of the ledger can overflow.
    fn volume(&self) -> Option<Decimal> {
        checked_total(self.transactions.iter().map(|transaction| transaction.amount))
    }

    /// Validate, record, and persist a new transaction.
    ///
    /// Without a date the transaction is stamped with today's local date.
    ///
    /// # Errors
    ///
    /// - `TallyError::InvalidKind` if the kind is not income or expense
    /// - `TallyError::InvalidAmount` if the amount is not above zero after
    ///   rounding, or would push the ledger's totals out of range
    /// - `TallyError::InvalidDateFormat` if the date is not YYYY-MM-DD
    /// - `TallyError::StorageWrite` if no id is left, or if persisting fails;
    ///   after a failed persist the transaction stays in memory
    pub fn add(&mut self, new: NewTransaction) -> Result<Transaction> {
        let kind: TransactionKind = new.kind.parse()?;
        let amount = round_money(new.amount);
        if new.amount <= Decimal::ZERO || amount <= Decimal::ZERO {
            return Err(TallyError::InvalidAmount(new.amount));
        }
        if self
            .volume()
            .and_then(|volume| volume.checked_add(amount))
            .is_none()
        {
            return Err(TallyError::InvalidAmount(new.amount));
        }
        let date = match new.date.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => parse_date(value)?,
            None => today(),
        };

        let transaction = Transaction {
            id: self.next_id()?,
            date,
            kind,
            category: new.category,
            description: new.description,
            amount,
        };
        self.transactions.push(transaction.clone());
        self.store.save(&self.transactions)?;

        info!(
            id = transaction.id,
            kind = %transaction.kind,
            amount = %transaction.amount,
            "recorded transaction"
        );
        Ok(transaction)
    }

    /// Transactions passing `filter`, in insertion order.
    pub fn list(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| filter.matches(transaction))
            .collect()
    }

    /// Like [`Ledger::list`], taking the raw optional filter strings.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidDateFormat` if a bound is malformed.
    pub fn list_matching(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<&Transaction>> {
        let filter = TransactionFilter::parse(start, end, category)?;
        Ok(self.list(&filter))
    }

    /// Sum of signed amounts over every transaction.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::AmountOverflow` if the sum leaves the `Decimal`
    /// range, which a store holding only `add`ed records cannot reach.
    pub fn balance(&self) -> Result<Decimal> {
        checked_total(self.transactions.iter().map(Transaction::signed_amount))
            .map(round_money)
            .ok_or_else(|| TallyError::AmountOverflow("balance".to_string()))
    }

    /// Category totals over every transaction.
    ///
    /// Use [`summarize`] directly to total a filtered subset.
    pub fn category_summary(&self) -> Result<CategorySummary> {
        summarize(&self.transactions)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
