//! # Currency Hex
//!
//! Application service layer and inbound adapters for the currency tool.
//!
//! ## Architecture
//!
//! - `service/` - Application service (orchestrates rate lookups)
//! - `inbound/` - MCP tool handler and HTTP server (Axum + rmcp)
//!
//! The service holds the `ExchangeRateProvider` port, so any adapter
//! (the Frankfurter client, a test stub) can be injected.

pub mod inbound;
pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::RateService;
