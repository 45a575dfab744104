//! Currency codes as forwarded to the rate provider.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A three-letter currency code such as `USD`.
///
/// The code is carried verbatim. Unknown or malformed codes are left for the
/// upstream provider to reject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Code used when the caller does not name a source currency.
    pub const DEFAULT_FROM: &'static str = "USD";
    /// Code used when the caller does not name a target currency.
    pub const DEFAULT_TO: &'static str = "EUR";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurrencyCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
