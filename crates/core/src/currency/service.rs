//! The currency service.
//!
//! A single instance is constructed at startup by the application
//! composition root and handed by reference to every dashboard view. All
//! rate-table and display-preference access goes through this service; no
//! other component mutates that state.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, warn};
use rust_decimal::Decimal;

use super::converter::RateTable;
use super::currency::{currency_metadata, BASE_CURRENCY};
use super::currency_errors::CurrencyError;
use super::currency_traits::{CurrencyServiceTrait, PreferenceStoreTrait, RateSourceTrait};
use super::{formatter, widgets};
use crate::constants::RATE_DISPLAY_PRECISION;
use crate::errors::Result;
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::settings::{SettingsStoreTrait, SettingsUpdate};

#[derive(Clone)]
pub struct CurrencyService {
    rate_source: Arc<dyn RateSourceTrait>,
    settings_store: Arc<dyn SettingsStoreTrait>,
    preference_store: Arc<dyn PreferenceStoreTrait>,
    table: Arc<RwLock<RateTable>>,
    display_currency: Arc<RwLock<String>>,
    rate_date: Arc<RwLock<Option<NaiveDate>>>,
    event_sink: Arc<dyn DomainEventSink>,
}

impl CurrencyService {
    pub fn new(
        rate_source: Arc<dyn RateSourceTrait>,
        settings_store: Arc<dyn SettingsStoreTrait>,
        preference_store: Arc<dyn PreferenceStoreTrait>,
    ) -> Self {
        Self {
            rate_source,
            settings_store,
            preference_store,
            table: Arc::new(RwLock::new(RateTable::with_defaults())),
            display_currency: Arc::new(RwLock::new(BASE_CURRENCY.to_string())),
            rate_date: Arc::new(RwLock::new(None)),
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Sets the domain event sink for this service.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    /// Fetches a payload and merges it into the table. The merge only runs
    /// after a fully parsed response, so any failure leaves the table
    /// untouched.
    async fn refresh_rates(&self) -> Result<usize> {
        let payload = self.rate_source.fetch_latest().await?;
        if payload.rates.is_empty() {
            debug!("Rates response carried no rates, keeping the current table");
            return Ok(0);
        }

        let applied = {
            let mut table = self
                .table
                .write()
                .map_err(|e| CurrencyError::Cache(e.to_string()))?;
            table.merge(&payload.rates)
        };

        let mut date = self
            .rate_date
            .write()
            .map_err(|e| CurrencyError::Cache(e.to_string()))?;
        *date = payload.date;

        Ok(applied)
    }

    /// Adopts the preferred currency from settings, or from the local
    /// store when settings are unreachable. Unsupported persisted codes
    /// are ignored so a stale store can never select an unknown currency.
    async fn adopt_persisted_preference(&self) -> Result<()> {
        match self.settings_store.get_settings().await {
            Ok(settings) => {
                if let Some(code) = settings.preferred_currency {
                    if currency_metadata(&code).is_some() {
                        self.store_display_currency(&code)?;
                    } else {
                        warn!("Ignoring unsupported preferred currency '{}' from settings", code);
                    }
                }
            }
            Err(e) => {
                warn!("Settings unreachable ({}), trying the local preference", e);
                if let Some(code) = self.preference_store.preferred_currency()? {
                    if currency_metadata(&code).is_some() {
                        self.store_display_currency(&code)?;
                    } else {
                        warn!("Ignoring unsupported local preference '{}'", code);
                    }
                }
            }
        }
        Ok(())
    }

    fn store_display_currency(&self, code: &str) -> Result<()> {
        let mut display = self
            .display_currency
            .write()
            .map_err(|e| CurrencyError::Cache(e.to_string()))?;
        *display = code.to_string();
        Ok(())
    }
}

#[async_trait]
impl CurrencyServiceTrait for CurrencyService {
    async fn initialize(&self) {
        self.load_rates().await;
        self.load_preference().await;
    }

    async fn load_rates(&self) {
        match self.refresh_rates().await {
            Ok(applied) => debug!("Applied {} exchange rate(s)", applied),
            Err(e) => warn!("Exchange rate refresh failed ({}), keeping the current table", e),
        }
    }

    async fn load_preference(&self) {
        if let Err(e) = self.adopt_persisted_preference().await {
            warn!("Could not load the display preference ({}), keeping the current value", e);
        }
    }

    async fn set_display_currency(&self, code: &str) {
        if currency_metadata(code).is_none() {
            warn!("Rejecting unsupported display currency '{}'", code);
            return;
        }

        // In-memory first: the new preference is visible to readers before
        // any persistence completes.
        if let Err(e) = self.store_display_currency(code) {
            warn!("Could not update the display currency: {}", e);
            return;
        }

        if let Err(e) = self.preference_store.set_preferred_currency(code) {
            warn!("Could not persist the display currency locally: {}", e);
        }

        // Best-effort: local state stays authoritative for this session.
        let update = SettingsUpdate::preferred_currency(code);
        if let Err(e) = self.settings_store.update_settings(&update).await {
            warn!(
                "Could not persist the display currency to settings ({}), keeping the local value",
                e
            );
        }

        self.event_sink
            .emit(DomainEvent::display_currency_changed(code));
    }

    fn display_currency(&self) -> String {
        self.display_currency
            .read()
            .map(|code| code.clone())
            .unwrap_or_else(|_| BASE_CURRENCY.to_string())
    }

    fn rate(&self, code: &str) -> Decimal {
        match self.table.read() {
            Ok(table) => table.rate(code),
            Err(_) => Decimal::ONE,
        }
    }

    fn rates(&self) -> HashMap<String, Decimal> {
        self.table
            .read()
            .map(|table| table.snapshot())
            .unwrap_or_default()
    }

    fn rate_date(&self) -> Option<NaiveDate> {
        self.rate_date.read().ok().and_then(|date| *date)
    }

    fn convert(&self, amount: Decimal, from: &str, to: &str) -> Decimal {
        if from == to {
            return amount;
        }
        match self.table.read() {
            Ok(table) => table.convert(amount, from, to),
            Err(_) => amount,
        }
    }

    fn convert_to_base(&self, amount: Decimal, from: &str) -> Decimal {
        match self.table.read() {
            Ok(table) => table.to_base(amount, from),
            Err(_) => amount,
        }
    }

    fn convert_from_base(&self, amount: Decimal, to: &str) -> Decimal {
        match self.table.read() {
            Ok(table) => table.from_base(amount, to),
            Err(_) => amount,
        }
    }

    fn format(&self, amount: Decimal, code: &str) -> String {
        formatter::format_amount(amount, code)
    }

    fn format_from_base(&self, amount: Decimal) -> String {
        let display = self.display_currency();
        let converted = self.convert(amount, BASE_CURRENCY, &display);
        formatter::format_amount(converted, &display)
    }

    fn rate_display(&self) -> String {
        let display = self.display_currency();
        if display == BASE_CURRENCY {
            return String::new();
        }
        format!(
            "1 {} = {} {}",
            display,
            formatter::plain_digits(self.rate(&display), RATE_DISPLAY_PRECISION),
            BASE_CURRENCY
        )
    }

    fn selector_markup(&self) -> String {
        widgets::selector(&self.display_currency())
    }

    fn toggle_markup(&self) -> String {
        widgets::toggle(&self.display_currency())
    }

    fn input_selector_markup(&self) -> String {
        widgets::input_selector(&self.display_currency())
    }
}
