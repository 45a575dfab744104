//! Frankfurter exchange rate adapter.
//!
//! Implements [`ExchangeRateProvider`] against the public Frankfurter REST API
//! (`GET {base}/{date}?from={from}&to={to}`).
//!
//! # Example
//! ```no_run
//! use currency_types::{ExchangeRateProvider, RateQuery};
//! use currency_upstream::{DEFAULT_FRANKFURTER_URL, FrankfurterProvider};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = FrankfurterProvider::new(DEFAULT_FRANKFURTER_URL)?;
//! let result = provider.fetch_rates(&RateQuery::latest("USD", "INR")).await?;
//! println!("{:?}", result.rate_for("INR"));
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Url};
use serde_json::Value;

use currency_types::{ExchangeRateProvider, RateError, RateQuery, RateResult};

/// Public Frankfurter endpoint.
pub const DEFAULT_FRANKFURTER_URL: &str = "https://api.frankfurter.app";

/// Error building a provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid upstream base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// HTTP client for the Frankfurter API.
///
/// Cheap to clone; clones share one connection pool. No state is kept between
/// lookups, so one instance may serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct FrankfurterProvider {
    http: Client,
    base_url: Url,
}

impl FrankfurterProvider {
    /// Creates a provider for the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ProviderError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a provider that reuses an existing HTTP client.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ProviderError> {
        let invalid = |reason: String| ProviderError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let base_url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".into()));
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `{base}/{date}?from=..&to=..`.
    ///
    /// The date goes in as a single path segment, so it is percent-encoded
    /// but otherwise forwarded as the caller wrote it.
    fn rates_url(&self, query: &RateQuery) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(query.date.as_path_segment());
        }
        url.query_pairs_mut()
            .clear()
            .append_pair("from", query.from.as_str())
            .append_pair("to", query.to.as_str());
        url
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for FrankfurterProvider {
    async fn fetch_rates(&self, query: &RateQuery) -> Result<RateResult, RateError> {
        let url = self.rates_url(query);
        tracing::debug!(%url, "requesting exchange rates");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| RateError::upstream(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let resp = resp
            .error_for_status()
            .map_err(|e| RateError::upstream(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let body = resp
            .bytes()
            .await
            .map_err(|e| RateError::upstream(None, e.to_string()))?;

        parse_rates(&body)
    }
}

/// Turns a provider response body into a [`RateResult`].
///
/// Checked in order: valid JSON, then a `rates` key. Nothing else about the
/// payload is inspected, so it reaches the caller as the provider sent it.
pub fn parse_rates(body: &[u8]) -> Result<RateResult, RateError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| RateError::MalformedUpstreamResponse(e.to_string()))?;

    match value {
        Value::Object(payload) => RateResult::from_json(payload),
        _ => None,
    }
    .ok_or_else(|| RateError::UnexpectedShape("response has no `rates` field".into()))
}
