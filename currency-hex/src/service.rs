//! Rate Application Service
//!
//! Orchestrates lookups through the provider port.
//! Contains NO infrastructure logic - the provider adapter is injected.

use std::sync::Arc;

use currency_types::{ExchangeRateProvider, RateError, RateQuery, RateResult};

/// Application service for exchange rate lookups.
///
/// Holds the provider behind an `Arc<dyn ..>` so one service can be shared by
/// every MCP session the server opens. Each call is independent: no retry, no
/// cache.
#[derive(Clone)]
pub struct RateService {
    provider: Arc<dyn ExchangeRateProvider>,
}

impl RateService {
    /// Creates a new rate service with the given provider.
    pub fn new(provider: impl ExchangeRateProvider) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    /// Creates a rate service from an already shared provider.
    pub fn from_shared(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { provider }
    }

    /// Looks up the exchange rate for one query.
    #[tracing::instrument(skip(self), fields(from = %query.from, to = %query.to, date = %query.date))]
    pub async fn get_exchange_rate(&self, query: RateQuery) -> Result<RateResult, RateError> {
        tracing::info!(
            "Tool: get_exchange_rate called for converting {} to {}",
            query.from,
            query.to
        );

        match self.provider.fetch_rates(&query).await {
            Ok(result) => {
                tracing::info!(
                    base = result.base().unwrap_or_default(),
                    date = result.date().unwrap_or_default(),
                    rates = result.rates().map_or(0, |r| r.len()),
                    "API response received"
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), error = %err, "exchange rate lookup failed");
                Err(err)
            }
        }
    }
}
