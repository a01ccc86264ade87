//! Locale-aware money formatting.
//!
//! Each supported currency carries its own separators, decimal count and
//! symbol placement rule (see [`CurrencyMeta`]). Unrecognized codes degrade
//! to a plain fixed-point number with no symbol instead of failing, since
//! formatting is called straight from view code.

use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::{currency_metadata, CurrencyMeta, SymbolPlacement};
use crate::constants::PLAIN_DECIMAL_PRECISION;

/// Renders `amount` in the named currency.
pub fn format_amount(amount: Decimal, code: &str) -> String {
    match currency_metadata(code) {
        Some(meta) => {
            let digits = localized_digits(amount, meta);
            match meta.placement {
                SymbolPlacement::Prefix => format!("{}{}", meta.symbol, digits),
                SymbolPlacement::Suffix => format!("{}{}", digits, meta.symbol),
                SymbolPlacement::SuffixSpaced => format!("{} {}", digits, meta.symbol),
            }
        }
        None => plain_digits(amount, PLAIN_DECIMAL_PRECISION),
    }
}

/// Fixed-point rendering with no grouping and no symbol.
pub fn plain_digits(amount: Decimal, decimals: u32) -> String {
    let (sign, int_digits, frac_digits) = split_parts(amount, decimals);
    if decimals == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

fn localized_digits(amount: Decimal, meta: &CurrencyMeta) -> String {
    let (sign, int_digits, frac_digits) = split_parts(amount, meta.decimals);
    let grouped = group_digits(&int_digits, meta.group_separator);
    if meta.decimals == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, meta.decimal_separator, frac_digits)
    }
}

/// Rounds half-away-from-zero to `decimals` places and splits the result
/// into sign, integer digits and zero-padded fraction digits.
fn split_parts(amount: Decimal, decimals: u32) -> (&'static str, String, String) {
    let rounded = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    };
    let mut frac = frac_part;
    frac.truncate(decimals as usize);
    while (frac.len() as u32) < decimals {
        frac.push('0');
    }
    (sign, int_part, frac)
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
