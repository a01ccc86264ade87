//! Rate table and pivot conversion.
//!
//! Every conversion routes through the base currency: an amount in currency
//! X is worth `amount * rate(X)` RON, and `amount * rate(X) / rate(Y)` in
//! currency Y. Rates express the RON value of one unit of the keyed
//! currency, so `rate(RON)` is 1 by invariant and a refresh merge must
//! never overwrite it.

use std::collections::HashMap;

use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::currency::{is_supported, BASE_CURRENCY};

/// Rates used until the first successful refresh (RON value of 1 unit).
const FALLBACK_RATES: [(&str, Decimal); 3] = [
    ("EUR", dec!(4.97)),
    ("USD", dec!(4.55)),
    ("VND", dec!(0.00018)),
];

/// Mapping from currency code to the RON value of one unit.
///
/// Always fully populated: construction seeds the fallback values, and a
/// merge replaces entries wholesale per code. Lookups for codes outside the
/// table resolve to an identity rate of 1 rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    /// Creates a table seeded with the hardcoded fallback rates.
    pub fn with_defaults() -> Self {
        let mut rates = HashMap::new();
        rates.insert(BASE_CURRENCY.to_string(), Decimal::ONE);
        for (code, rate) in FALLBACK_RATES {
            rates.insert(code.to_string(), rate);
        }
        Self { rates }
    }

    /// RON value of one unit of `code`.
    ///
    /// The base currency is fixed at 1; unrecognized codes also resolve
    /// to 1, which keeps read paths total.
    pub fn rate(&self, code: &str) -> Decimal {
        if code == BASE_CURRENCY {
            return Decimal::ONE;
        }
        self.rates.get(code).copied().unwrap_or(Decimal::ONE)
    }

    /// Merges a refresh payload into the table and returns how many entries
    /// were applied.
    ///
    /// Codes absent from `incoming` keep their previous value. A base
    /// currency entry is dropped so its rate stays exactly 1, and
    /// unsupported codes or non-positive values are skipped.
    pub fn merge(&mut self, incoming: &HashMap<String, Decimal>) -> usize {
        let mut applied = 0;
        for (code, rate) in incoming {
            if code == BASE_CURRENCY {
                warn!(
                    "Rate refresh carried a {} entry ({}), keeping the fixed rate of 1",
                    BASE_CURRENCY, rate
                );
                continue;
            }
            if !is_supported(code) {
                warn!("Skipping rate for unsupported currency {}", code);
                continue;
            }
            if rate.is_sign_negative() || rate.is_zero() {
                warn!("Skipping non-positive rate {} for {}", rate, code);
                continue;
            }
            self.rates.insert(code.clone(), *rate);
            applied += 1;
        }
        applied
    }

    /// Value of `amount` units of `from` expressed in the base currency.
    pub fn to_base(&self, amount: Decimal, from: &str) -> Decimal {
        amount * self.rate(from)
    }

    /// Value of `amount` base-currency units expressed in `to`.
    pub fn from_base(&self, amount: Decimal, to: &str) -> Decimal {
        amount / self.rate(to)
    }

    /// Converts `amount` from currency `from` to currency `to` through the
    /// base-currency pivot.
    ///
    /// Same-currency conversions return the amount untouched so no rounding
    /// drift is introduced.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        if from == to {
            return amount;
        }
        self.from_base(self.to_base(amount, from), to)
    }

    /// A copy of the current table contents.
    pub fn snapshot(&self) -> HashMap<String, Decimal> {
        self.rates.clone()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
