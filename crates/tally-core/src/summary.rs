//! Per-category totals of signed amounts.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{Result, TallyError};
use crate::money::round_money;
use crate::transaction::Transaction;

/// Category totals in first-encounter order.
///
/// Keys are the exact category strings; "Market" and "market" are separate
/// buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    totals: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl CategorySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signed amount to a category, rounding the bucket afterwards.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::AmountOverflow` if the bucket leaves the
    /// `Decimal` range; the bucket keeps its previous total.
    pub fn accumulate(&mut self, category: &str, signed_amount: Decimal) -> Result<()> {
        let slot = match self.index.get(category) {
            Some(&slot) => slot,
            None => {
                self.totals.push((category.to_string(), Decimal::ZERO));
                self.index.insert(category.to_string(), self.totals.len() - 1);
                self.totals.len() - 1
            }
        };
        let total = &mut self.totals[slot].1;
        let sum = total
            .checked_add(signed_amount)
            .ok_or_else(|| TallyError::AmountOverflow(format!("category \"{}\"", category)))?;
        *total = round_money(sum);
        Ok(())
    }

    /// Total for an exact category label.
    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index.get(category).map(|&slot| self.totals[slot].1)
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterate in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.totals
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
    }

    /// Totals sorted by category name, for display.
    pub fn sorted(&self) -> Vec<(&str, Decimal)> {
        let mut rows: Vec<(&str, Decimal)> = self.iter().collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

/// Summarize an arbitrary set of transactions by category.
///
/// # Errors
///
/// Returns `TallyError::AmountOverflow` if a category total leaves the
/// `Decimal` range.
pub fn summarize<'a, I>(transactions: I) -> Result<CategorySummary>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut summary = CategorySummary::new();
    for transaction in transactions {
        summary.accumulate(&transaction.category, transaction.signed_amount())?;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::{parse_date, TransactionKind};
    use rust_decimal_macros::dec;

    fn tx(id: u64, kind: TransactionKind, category: &str, amount: Decimal) -> Transaction {
        Transaction {
            id,
            date: parse_date("2024-01-05").unwrap(),
            kind,
            category: category.to_string(),
            description: String::new(),
            amount,
        }
    }

    #[test]
    fn test_summarize_groups_signed_amounts() {
        let transactions = vec![
            tx(1, TransactionKind::Income, "satis", dec!(200)),
            tx(2, TransactionKind::Expense, "masraf", dec!(50)),
            tx(3, TransactionKind::Expense, "masraf", dec!(20)),
        ];

        let summary = summarize(&transactions).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.get("satis"), Some(dec!(200)));
        assert_eq!(summary.get("masraf"), Some(dec!(-70)));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let transactions = vec![
            tx(1, TransactionKind::Expense, "Market", dec!(5)),
            tx(2, TransactionKind::Expense, "market", dec!(7)),
        ];

        let summary = summarize(&transactions).unwrap();

        assert_eq!(summary.get("Market"), Some(dec!(-5)));
        assert_eq!(summary.get("market"), Some(dec!(-7)));
        assert_eq!(summary.get("MARKET"), None);
    }

    #[test]
    fn test_iter_keeps_first_encounter_order_and_sorted_orders_by_name() {
        let transactions = vec![
            tx(1, TransactionKind::Expense, "rent", dec!(500)),
            tx(2, TransactionKind::Income, "bonus", dec!(50)),
            tx(3, TransactionKind::Expense, "rent", dec!(1)),
        ];

        let summary = summarize(&transactions).unwrap();

        let order: Vec<&str> = summary.iter().map(|(c, _)| c).collect();
        assert_eq!(order, vec!["rent", "bonus"]);
        let sorted: Vec<&str> = summary.sorted().into_iter().map(|(c, _)| c).collect();
        assert_eq!(sorted, vec!["bonus", "rent"]);
    }

    #[test]
    fn test_bucket_rounded_after_each_step() {
        let mut summary = CategorySummary::new();
        summary.accumulate("fees", dec!(0.005)).unwrap();
        summary.accumulate("fees", dec!(0.005)).unwrap();

        // 0.005 -> 0.00, then 0.005 -> 0.00 again
        assert_eq!(summary.get("fees"), Some(dec!(0.00)));
    }

    #[test]
    fn test_empty_input_gives_empty_summary() {
        let summary = summarize(std::iter::empty::<&Transaction>()).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_overflowing_category_is_an_error() {
        let transactions = vec![
            tx(1, TransactionKind::Income, "big", Decimal::MAX),
            tx(2, TransactionKind::Income, "big", dec!(1)),
        ];

        let err = summarize(&transactions).unwrap_err();

        assert!(matches!(err, TallyError::AmountOverflow(_)));
    }

    #[test]
    fn test_opposite_signs_near_the_limit_still_sum() {
        let transactions = vec![
            tx(1, TransactionKind::Income, "big", Decimal::MAX),
            tx(2, TransactionKind::Expense, "big", Decimal::MAX),
        ];

        let summary = summarize(&transactions).unwrap();

        assert_eq!(summary.get("big"), Some(Decimal::ZERO));
    }
}
