use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::currency_model::RatesPayload;
use crate::errors::Result;

/// Source of fresh exchange rates.
#[async_trait]
pub trait RateSourceTrait: Send + Sync {
    /// Fetches the latest rates payload.
    async fn fetch_latest(&self) -> Result<RatesPayload>;
}

/// Local single-key persistence for the preferred display currency.
///
/// Read when the settings store is unreachable, written on every
/// successful preference change.
pub trait PreferenceStoreTrait: Send + Sync {
    fn preferred_currency(&self) -> Result<Option<String>>;
    fn set_preferred_currency(&self, code: &str) -> Result<()>;
}

/// Trait defining the contract for currency service operations.
#[async_trait]
pub trait CurrencyServiceTrait: Send + Sync {
    /// Refreshes rates and loads the persisted preference. Never fails
    /// outward; either step falling over leaves its defaults in place.
    async fn initialize(&self);

    /// Fetches and merges fresh rates. Any failure leaves the table
    /// completely unchanged.
    async fn load_rates(&self);

    /// Adopts the persisted display preference, falling back to the local
    /// store when the settings store is unreachable.
    async fn load_preference(&self);

    /// Switches the display currency, persists it and notifies observers.
    /// Unsupported codes are logged and ignored.
    async fn set_display_currency(&self, code: &str);

    fn display_currency(&self) -> String;
    fn rate(&self, code: &str) -> Decimal;
    fn rates(&self) -> HashMap<String, Decimal>;
    fn rate_date(&self) -> Option<NaiveDate>;

    fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal;
    fn convert_to_base(&self, amount: Decimal, from: &str) -> Decimal;
    fn convert_from_base(&self, amount: Decimal, to: &str) -> Decimal;

    fn format(&self, amount: Decimal, code: &str) -> String;
    /// Converts a base-currency amount into the display currency, then
    /// formats it.
    fn format_from_base(&self, amount: Decimal) -> String;

    /// Human-readable `1 X = Y RON` line for the current display currency;
    /// empty when the display currency is the base currency.
    fn rate_display(&self) -> String;

    fn selector_markup(&self) -> String;
    fn toggle_markup(&self) -> String;
    fn input_selector_markup(&self) -> String;
}
