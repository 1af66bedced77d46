//! JSON output formatting for transactions and reports.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use tally_core::{CategorySummary, Transaction};

/// Convert transactions to a JSON array in the storage layout.
pub fn transactions_json(transactions: &[&Transaction]) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(transactions)?)
}

/// Convert a category summary to a JSON array sorted by category.
pub fn summary_json(summary: &CategorySummary) -> anyhow::Result<Value> {
    summary
        .sorted()
        .into_iter()
        .map(|(category, total)| -> anyhow::Result<Value> {
            let total = amount_json(total)?;
            Ok(json!({ "category": category, "total": total }))
        })
        .collect()
}

/// Convert a balance to a JSON object.
pub fn balance_json(balance: Decimal, currency: Option<&str>) -> anyhow::Result<Value> {
    let balance = amount_json(balance)?;
    Ok(json!({ "balance": balance, "currency": currency }))
}

/// An amount as an exact JSON number.
fn amount_json(amount: Decimal) -> anyhow::Result<Value> {
    Ok(Value::Number(amount.to_string().parse()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tally_core::summarize;
    use tally_core::transaction::{parse_date, TransactionKind};

    fn tx(id: u64, kind: TransactionKind, category: &str, amount: Decimal) -> Transaction {
        Transaction {
            id,
            date: parse_date("2024-01-05").unwrap(),
            kind,
            category: category.to_string(),
            description: "x".to_string(),
            amount,
        }
    }

    #[test]
    fn test_transactions_json_uses_storage_field_names() {
        let t = tx(4, TransactionKind::Expense, "market", dec!(30));

        let value = transactions_json(&[&t]).unwrap();

        assert_eq!(value[0]["id"], 4);
        assert_eq!(value[0]["date"], "2024-01-05");
        assert_eq!(value[0]["kind"], "expense");
        assert_eq!(value[0]["amount"].as_f64(), Some(30.0));
    }

    #[test]
    fn test_summary_json_sorted() {
        let records = vec![
            tx(1, TransactionKind::Expense, "rent", dec!(500)),
            tx(2, TransactionKind::Income, "bonus", dec!(50)),
        ];

        let value = summary_json(&summarize(&records).unwrap()).unwrap();

        assert_eq!(value[0]["category"], "bonus");
        assert_eq!(value[1]["category"], "rent");
        assert_eq!(value[1]["total"].as_f64(), Some(-500.0));
    }

    #[test]
    fn test_balance_json_keeps_every_digit() {
        let value = balance_json(dec!(12345678901234567.89), Some("TL")).unwrap();

        assert_eq!(
            serde_json::to_string(&value["balance"]).unwrap(),
            "12345678901234567.89"
        );
        assert_eq!(value["currency"], "TL");
    }
}
