//! String formatting utilities for UI rendering.

use rust_decimal::Decimal;

use tally_core::money::round_money;

/// Pad a string to a fixed width (left-aligned).
pub fn pad_right(s: &str, width: usize) -> String {
    let char_count = s.chars().count();
    if char_count >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - char_count))
    }
}

/// Format an amount with two decimals and thousands separators.
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, fraction)
}

/// Append a currency suffix when one is configured.
pub fn with_currency(amount: &str, currency: Option<&str>) -> String {
    match currency {
        Some(code) if !code.is_empty() => format!("{} {}", amount, code),
        _ => amount.to_string(),
    }
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}
