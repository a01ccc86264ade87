//! Domain event types.

use serde::{Deserialize, Serialize};

/// Events emitted by core services after successful mutations.
///
/// These represent facts about state changes. Consumers (dashboard views)
/// translate them into presentation updates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DomainEvent {
    /// The user picked a different display currency.
    DisplayCurrencyChanged { currency: String },
}

impl DomainEvent {
    /// Creates a DisplayCurrencyChanged event.
    pub fn display_currency_changed(currency: &str) -> Self {
        Self::DisplayCurrencyChanged {
            currency: currency.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_a_type_tag() {
        let event = DomainEvent::display_currency_changed("EUR");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"display_currency_changed","currency":"EUR"}"#
        );
    }
}
