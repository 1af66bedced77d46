//! Rounding rules for currency amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits kept for every stored or reported amount.
pub const MONEY_SCALE: u32 = 2;

/// Round an amount to two fraction digits, midpoints to even.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Add up amounts, or `None` if the total leaves the `Decimal` range.
pub fn checked_total<I>(amounts: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
}
