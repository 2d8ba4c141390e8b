use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;

use crate::error::{HubError, HubResult};
use crate::models::{AccountLike, Unit};

/// Converts an amount in atomic units (satoshis, wei, ...) to the account's display unit.
///
/// The shift is exact. `None` in gives `None` out; a shift that cannot be represented
/// without losing digits also gives `None`.
pub fn to_display_amount(amount: Option<Decimal>, account: &AccountLike) -> Option<Decimal> {
    let amount = amount?;
    let magnitude = account.magnitude();

    let shifted = shift_left(amount, magnitude);
    if shifted.is_none() {
        warn!(
            magnitude = magnitude,
            scale = amount.scale();
            "Amount cannot be represented in display units"
        );
    }

    shifted.map(|d| d.normalize())
}

/// Largest number of fractional digits a `Decimal` can hold.
const MAX_SCALE: u32 = 28;

/// Moves the decimal point `places` digits to the left. Trailing zero digits of the
/// mantissa are dropped while the scale exceeds what `Decimal` can hold; a nonzero
/// digit is never dropped.
fn shift_left(amount: Decimal, places: u32) -> Option<Decimal> {
    let mut mantissa = amount.mantissa();
    if mantissa == 0 {
        return Some(Decimal::ZERO);
    }

    let mut scale = amount.scale().checked_add(places)?;
    while scale > MAX_SCALE && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }

    Decimal::try_from_i128_with_scale(mantissa, scale).ok()
}

/// Parses a decimal amount such as `"1000000"` or `"0.5"`.
pub fn parse_amount(s: &str) -> HubResult<Decimal> {
    Decimal::from_str(s.trim()).map_err(|e| HubError::InvalidAmount(s.to_string(), e))
}

/// Formats a display amount with its unit code, e.g. `"1,234.5 BTC"`.
pub fn format_display_amount(amount: Decimal, unit: &Unit) -> String {
    let amount = amount.normalize();
    let digits = amount.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut result = String::new();
    if amount.is_sign_negative() && !amount.is_zero() {
        result.push('-');
    }
    result.push_str(&format_with_thousands_separator(whole));
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }

    format!("{} {}", result, unit.code)
}

/// Groups an ASCII digit string (the integer part of a decimal) by thousands.
fn format_with_thousands_separator(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
