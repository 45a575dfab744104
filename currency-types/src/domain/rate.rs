//! Rate lookup result as published by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The provider payload for one lookup, kept exactly as parsed.
///
/// Only the presence of `rates` is guaranteed. Everything else (`amount`,
/// `base`, `date`, time-series bounds, fields added later by the provider) is
/// carried untouched and serialized back in the order it arrived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateResult(Map<String, Value>);

impl RateResult {
    /// Wraps a parsed payload. Returns `None` unless it has a `rates` key.
    pub fn from_json(payload: Map<String, Value>) -> Option<Self> {
        payload.contains_key("rates").then_some(Self(payload))
    }

    pub fn as_json(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_json(self) -> Map<String, Value> {
        self.0
    }

    pub fn base(&self) -> Option<&str> {
        self.0.get("base").and_then(Value::as_str)
    }

    pub fn date(&self) -> Option<&str> {
        self.0.get("date").and_then(Value::as_str)
    }

    /// The `rates` object. Keyed by currency for single-day lookups and by
    /// date for time series.
    pub fn rates(&self) -> Option<&Map<String, Value>> {
        self.0.get("rates").and_then(Value::as_object)
    }

    /// Rate for a single target currency of a single-day lookup.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates()?.get(code)?.as_f64()
    }
}
