//! Core error types for the Hanoibound dashboard crates.
//!
//! This module defines transport-agnostic error types. Client-specific
//! errors (HTTP, filesystem) are converted to these types by the `connect`
//! crate at the call site.

use thiserror::Error;

use crate::currency::CurrencyError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the dashboard core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency operation failed: {0}")]
    Currency(#[from] CurrencyError),

    #[error("Settings operation failed: {0}")]
    Settings(String),

    #[error("Preference store operation failed: {0}")]
    Store(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
