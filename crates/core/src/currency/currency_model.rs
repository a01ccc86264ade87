//! Wire model for the rates source.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload returned by a rates source.
///
/// A response with no `rates` field deserializes to an empty map and is
/// treated as "no update". The snapshot date is informational only.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct RatesPayload {
    #[serde(default)]
    pub rates: HashMap<String, Decimal>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parses_the_dashboard_rates_response() {
        let body = r#"{"rates": {"EUR": 4.97, "USD": 4.55, "VND": 0.00018}, "date": "2026-08-04"}"#;
        let payload: RatesPayload = serde_json::from_str(body).unwrap();

        assert_eq!(payload.rates.get("EUR"), Some(&dec!(4.97)));
        assert_eq!(payload.rates.get("VND"), Some(&dec!(0.00018)));
        assert_eq!(
            payload.date,
            Some(NaiveDate::from_ymd_opt(2026, 8, 4).unwrap())
        );
    }

    #[test]
    fn test_missing_rates_field_means_no_update() {
        let payload: RatesPayload = serde_json::from_str(r#"{"date": "2026-08-04"}"#).unwrap();
        assert!(payload.rates.is_empty());

        let payload: RatesPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.rates.is_empty());
        assert_eq!(payload.date, None);
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(serde_json::from_str::<RatesPayload>("not json").is_err());
        assert!(serde_json::from_str::<RatesPayload>(r#"{"rates": "oops"}"#).is_err());
    }
}
