//! # Currency Types
//!
//! Domain types and port traits for the currency exchange rate tool.
//! This crate has ZERO IO dependencies - only data structures,
//! the error taxonomy, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (CurrencyCode, RateQuery, RateResult)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Tool arguments and error payloads at the MCP boundary
//! - `error/` - Lookup error taxonomy

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{CurrencyCode, DateOrLatest, RateQuery, RateResult};
pub use dto::*;
pub use error::{RateError, RateErrorKind};
pub use ports::ExchangeRateProvider;
