//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate services.
//! Implementations can be HTTP clients, stubs in tests, etc.

use crate::{RateError, RateQuery, RateResult};

/// Port trait for exchange rate providers.
///
/// Implementations must not fall back to a default or cached rate when the
/// provider cannot be reached; every failure is reported as a [`RateError`].
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync + 'static {
    /// Fetches the rates for `query.from` -> `query.to` on `query.date`.
    async fn fetch_rates(&self, query: &RateQuery) -> Result<RateResult, RateError>;
}
