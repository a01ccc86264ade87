use thiserror::Error;

/// Errors raised inside the currency module.
///
/// None of these escape the service's public operations; they exist so the
/// fault-tolerant paths have a reason to log.
#[derive(Error, Debug)]
pub enum CurrencyError {
    #[error("Failed to fetch exchange rates: {0}")]
    Fetch(String),

    #[error("Cache error: {0}")]
    Cache(String),
}
