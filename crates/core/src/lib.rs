//! Forex Core - Domain models, services, and traits.
//!
//! This crate contains the conversion engine for the forex converter
//! service. It is database-agnostic and defines the ledger repository trait
//! that is implemented by the `forex-storage-sqlite` crate; exchange rates
//! come from the provider abstraction in `forex-rate-providers`.

pub mod constants;
pub mod conversions;
pub mod currency;
pub mod errors;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
