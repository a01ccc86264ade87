//! HTTP client for the dashboard settings endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use hanoibound_core::errors::{Error, Result};
use hanoibound_core::settings::{Settings, SettingsStoreTrait, SettingsUpdate};

/// Default HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings store backed by `GET`/`PUT /api/dashboard.php?action=settings`.
///
/// Reads return the full settings document; writes send a partial update
/// object and the server merges it field by field.
pub struct ApiSettingsStore {
    client: Client,
    base_url: String,
}

impl ApiSettingsStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn settings_url(&self) -> String {
        format!(
            "{}/api/dashboard.php?action=settings",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SettingsStoreTrait for ApiSettingsStore {
    async fn get_settings(&self) -> Result<Settings> {
        let url = self.settings_url();
        debug!("Fetching settings from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Settings(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Settings(e.to_string()))?;

        response
            .json::<Settings>()
            .await
            .map_err(|e| Error::Settings(e.to_string()))
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        let url = self.settings_url();
        debug!("Updating settings at {}", url);

        self.client
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(|e| Error::Settings(e.to_string()))?
            .error_for_status()
            .map_err(|e| Error::Settings(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_url_shape() {
        let store = ApiSettingsStore::new("http://localhost:5000/");
        assert_eq!(
            store.settings_url(),
            "http://localhost:5000/api/dashboard.php?action=settings"
        );
    }
}
