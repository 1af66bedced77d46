//! Text and table output formatting for transactions and reports.

use rust_decimal::Decimal;

use tally_core::{CategorySummary, Transaction};

use super::json::{balance_json, summary_json, transactions_json};
use crate::ui::format::with_currency;
use crate::ui::theme::{styled, styles};
use crate::ui::{
    aligned_table, badge, format_amount, print, single_line, table, Badge, Column, UiContext,
};

const TRANSACTION_COLUMNS: [Column; 6] = [
    Column::new("ID"),
    Column::new("Date"),
    Column::new("Kind"),
    Column::new("Category"),
    Column::new("Description"),
    Column::numeric("Amount"),
];

/// Table cells for one transaction.
pub fn transaction_row(transaction: &Transaction) -> Vec<String> {
    vec![
        transaction.id.to_string(),
        transaction.date.to_string(),
        transaction.kind.to_string(),
        single_line(&transaction.category),
        single_line(&transaction.description),
        format_amount(transaction.amount),
    ]
}

/// Print a list of transactions as a table, or as JSON.
pub fn print_transaction_list(ctx: &UiContext, transactions: &[&Transaction]) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&transactions_json(transactions)?)?
        );
        return Ok(());
    }

    if transactions.is_empty() {
        println!("No records found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = transactions.iter().map(|t| transaction_row(t)).collect();
    if ctx.mode.is_pretty() {
        println!("{}", table(ctx, &TRANSACTION_COLUMNS, &rows));
    } else {
        println!("{}", aligned_table(&TRANSACTION_COLUMNS, &rows));
    }
    Ok(())
}

/// Confirmation printed after a successful `add`.
pub fn print_saved(ctx: &UiContext, transaction: &Transaction) {
    let message = format!(
        "Saved: {} - {} {} {}",
        transaction.id,
        transaction.date,
        transaction.category,
        format_amount(transaction.amount)
    );
    if ctx.mode.is_pretty() {
        print(ctx, &badge(ctx, Badge::Ok, &message));
    } else {
        print(ctx, &message);
    }
}

/// `Current balance: <amount>[ <currency>]`
pub fn balance_line(balance: Decimal, currency: Option<&str>) -> String {
    format!(
        "Current balance: {}",
        with_currency(&format_amount(balance), currency)
    )
}

pub fn print_balance(
    ctx: &UiContext,
    balance: Decimal,
    currency: Option<&str>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&balance_json(balance, currency)?)?
        );
        return Ok(());
    }

    let line = balance_line(balance, currency);
    if ctx.mode.is_pretty() {
        println!("{}", styled(&line, styles::bold(), ctx.color));
    } else {
        println!("{}", line);
    }
    Ok(())
}

/// One `<category>: <total>[ <currency>]` line per category, sorted by name.
pub fn summary_lines(summary: &CategorySummary, currency: Option<&str>) -> Vec<(String, Decimal)> {
    summary
        .sorted()
        .into_iter()
        .map(|(category, total)| {
            (
                format!(
                    "{}: {}",
                    single_line(category),
                    with_currency(&format_amount(total), currency)
                ),
                total,
            )
        })
        .collect()
}

pub fn print_summary(
    ctx: &UiContext,
    summary: &CategorySummary,
    currency: Option<&str>,
) -> anyhow::Result<()> {
    if ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&summary_json(summary)?)?);
        return Ok(());
    }

    if summary.is_empty() {
        println!("No summary found.");
        return Ok(());
    }

    for (line, total) in summary_lines(summary, currency) {
        let style = if total.is_sign_negative() && !total.is_zero() {
            styles::debit()
        } else {
            styles::credit()
        };
        if ctx.mode.is_pretty() {
            println!("{}", styled(&line, style, ctx.color));
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}
