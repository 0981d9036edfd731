//! Saturating arithmetic for engine totals.
//!
//! `Decimal` operators panic on overflow. Every product and sum in the
//! models and engines goes through the saturating forms so that any finite
//! input yields a result, clamped to `Decimal::MIN..=Decimal::MAX`.

use rust_decimal::Decimal;

/// `numerator / denominator`, clamped on overflow; 0 for a zero denominator.
pub(crate) fn div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or(
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        },
    )
}

/// Sum of `values`, clamped on overflow.
pub(crate) fn sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, Decimal::saturating_add)
}
