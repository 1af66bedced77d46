//! Transaction values and the types used to create and select them.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Date format accepted on input and written to storage.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether money came in or went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Storage and display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TallyError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TallyError::InvalidKind(value.to_string())),
        }
    }
}

/// A recorded movement of money.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential identifier, unique within a ledger
    pub id: u64,

    /// Calendar date the transaction applies to
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Category label, case preserved
    pub category: String,

    /// Free-form description
    pub description: String,

    /// Positive amount, two fraction digits, stored as an exact JSON number
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
}

impl Transaction {
    /// Amount with the sign of its kind: income positive, expense negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

/// Unvalidated input for [`crate::Ledger::add`].
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// Kind label as typed by the user
    pub kind: String,

    /// Amount before validation and rounding
    pub amount: Decimal,

    pub category: String,

    pub description: String,

    /// Optional YYYY-MM-DD date; today when absent
    pub date: Option<String>,
}

impl NewTransaction {
    pub fn new(
        kind: impl Into<String>,
        amount: Decimal,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            amount,
            category: category.into(),
            description: description.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Filter for selecting transactions.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Start date (inclusive)
    pub since: Option<NaiveDate>,

    /// End date (inclusive)
    pub until: Option<NaiveDate>,

    /// Category, compared case-insensitively
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a filter from optional user-supplied strings.
    ///
    /// Empty strings are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::InvalidDateFormat` if a bound is not YYYY-MM-DD.
    pub fn parse(start: Option<&str>, end: Option<&str>, category: Option<&str>) -> Result<Self> {
        let mut filter = Self::new();
        if let Some(value) = start.filter(|v| !v.is_empty()) {
            filter = filter.since(parse_date(value)?);
        }
        if let Some(value) = end.filter(|v| !v.is_empty()) {
            filter = filter.until(parse_date(value)?);
        }
        if let Some(value) = category.filter(|v| !v.is_empty()) {
            filter = filter.category(value);
        }
        Ok(filter)
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Check whether a transaction passes every configured bound.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        if self.since.is_some_and(|since| transaction.date < since) {
            return false;
        }
        if self.until.is_some_and(|until| transaction.date > until) {
            return false;
        }
        if let Some(ref category) = self.category {
            if transaction.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        true
    }
}

/// Parse a YYYY-MM-DD calendar date.
///
/// # Errors
///
/// Returns `TallyError::InvalidDateFormat` for anything else.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| TallyError::InvalidDateFormat(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample(kind: TransactionKind, category: &str, date: &str) -> Transaction {
        Transaction {
            id: 1,
            date: parse_date(date).unwrap(),
            kind,
            category: category.to_string(),
            description: "sample".to_string(),
            amount: dec!(12.50),
        }
    }

    #[test]
    fn test_signed_amount_follows_kind() {
        let income = sample(TransactionKind::Income, "salary", "2024-01-01");
        let expense = sample(TransactionKind::Expense, "rent", "2024-01-01");

        assert_eq!(income.signed_amount(), dec!(12.50));
        assert_eq!(expense.signed_amount(), dec!(-12.50));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("Expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(TallyError::InvalidKind(value)) if value == "transfer"
        ));
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("2024-04-01").is_ok());
        assert!(parse_date("01/04/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("yesterday").is_err());
    }

    #[test]
    fn test_new_transaction_builder() {
        let new = NewTransaction::new("income", dec!(100), "salary", "April").with_date("2024-04-01");

        assert_eq!(new.kind, "income");
        assert_eq!(new.amount, dec!(100));
        assert_eq!(new.date.as_deref(), Some("2024-04-01"));
    }

    #[test]
    fn test_filter_bounds_are_inclusive() {
        let filter = TransactionFilter::parse(Some("2024-03-01"), Some("2024-03-31"), None).unwrap();

        assert!(filter.matches(&sample(TransactionKind::Income, "a", "2024-03-01")));
        assert!(filter.matches(&sample(TransactionKind::Income, "a", "2024-03-31")));
        assert!(!filter.matches(&sample(TransactionKind::Income, "a", "2024-02-29")));
        assert!(!filter.matches(&sample(TransactionKind::Income, "a", "2024-04-01")));
    }

    #[test]
    fn test_filter_category_ignores_case() {
        let filter = TransactionFilter::new().category("MARKET");

        assert!(filter.matches(&sample(TransactionKind::Expense, "market", "2024-01-01")));
        assert!(filter.matches(&sample(TransactionKind::Expense, "Market", "2024-01-01")));
        assert!(!filter.matches(&sample(TransactionKind::Expense, "markets", "2024-01-01")));
    }

    #[test]
    fn test_filter_parse_treats_empty_as_absent() {
        let filter = TransactionFilter::parse(Some(""), None, Some("")).unwrap();

        assert!(filter.since.is_none());
        assert!(filter.category.is_none());
    }

    #[test]
    fn test_filter_parse_rejects_bad_date() {
        let err = TransactionFilter::parse(None, Some("2024-13-01"), None).unwrap_err();
        assert!(matches!(err, TallyError::InvalidDateFormat(_)));
    }
}
