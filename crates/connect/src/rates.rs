//! HTTP client for the dashboard rates endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use hanoibound_core::currency::{CurrencyError, RateSourceTrait, RatesPayload};
use hanoibound_core::errors::Result;

/// Default HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Rate source backed by `GET /api/currency.php?action=rates`.
///
/// The endpoint answers `{ "rates": { "<code>": <number>, ... }, "date":
/// "YYYY-MM-DD" }`; a response without a `rates` field is a valid
/// "nothing changed" answer.
pub struct ApiRateSource {
    client: Client,
    base_url: String,
}

impl ApiRateSource {
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

    fn rates_url(&self) -> String {
        format!(
            "{}/api/currency.php?action=rates",
            self.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl RateSourceTrait for ApiRateSource {
    async fn fetch_latest(&self) -> Result<RatesPayload> {
        let url = self.rates_url();
        debug!("Fetching exchange rates from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CurrencyError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| CurrencyError::Fetch(e.to_string()))?;

        let payload = response
            .json::<RatesPayload>()
            .await
            .map_err(|e| CurrencyError::Fetch(e.to_string()))?;

        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hanoibound_core::errors::Error;

    #[tokio::test]
    async fn test_unreachable_source_surfaces_a_fetch_error() {
        // Port 9 (discard) refuses connections on any sane host.
        let source = ApiRateSource::new("http://127.0.0.1:9");
        let result = source.fetch_latest().await;
        assert!(matches!(
            result,
            Err(Error::Currency(CurrencyError::Fetch(_)))
        ));
    }

    #[test]
    fn test_rates_url_shape() {
        let source = ApiRateSource::new("http://localhost:5000");
        assert_eq!(
            source.rates_url(),
            "http://localhost:5000/api/currency.php?action=rates"
        );
    }

    #[test]
    fn test_trailing_slash_is_tolerated() {
        let source = ApiRateSource::new("http://localhost:5000/");
        assert_eq!(
            source.rates_url(),
            "http://localhost:5000/api/currency.php?action=rates"
        );
    }
}
