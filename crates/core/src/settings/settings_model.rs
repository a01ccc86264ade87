//! Dashboard settings document and partial-update payload.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Settings document as served by the dashboard settings endpoint.
///
/// The currency subsystem reads only `preferred_currency`; the remaining
/// fields ride along so a full document round-trips untouched. Every field
/// tolerates absence.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(default)]
    pub target_date: String,
    #[serde(default)]
    pub income_target: Decimal,
    #[serde(default)]
    pub python_weekly_target: u32,
    #[serde(default)]
    pub vietnamese_weekly_target: u32,
    #[serde(default)]
    pub savings: Decimal,
    #[serde(default)]
    pub monthly_burn: Decimal,
    #[serde(default)]
    pub preferred_currency: Option<String>,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub exchange_rates: HashMap<String, Decimal>,
}

impl Default for Settings {
    // Mirrors the server-seeded defaults.
    fn default() -> Self {
        Self {
            target_date: "2026-10-31".to_string(),
            income_target: dec!(7500),
            python_weekly_target: 8,
            vietnamese_weekly_target: 7,
            savings: dec!(27500),
            monthly_burn: dec!(3000),
            preferred_currency: Some("EUR".to_string()),
            github_username: String::new(),
            exchange_rates: HashMap::new(),
        }
    }
}

/// Partial settings update; only the set fields are serialized, so the
/// server leaves everything else untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_target: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_weekly_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vietnamese_weekly_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_burn: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
}

impl SettingsUpdate {
    /// An update that only changes the preferred display currency.
    pub fn preferred_currency(code: &str) -> Self {
        Self {
            preferred_currency: Some(code.to_string()),
            ..Self::default()
        }
    }
}
