//! Hanoibound Core - domain entities, services, and traits.
//!
//! This crate contains the currency logic for the Hanoibound dashboard.
//! It is transport-agnostic and defines collaborator traits that are
//! implemented by the `connect` crate.

pub mod constants;
pub mod currency;
pub mod errors;
pub mod events;
pub mod settings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
