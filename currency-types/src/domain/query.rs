//! Rate lookup request.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::currency::CurrencyCode;

/// Either the most recent published rates or a specific calendar date.
///
/// Dates are not validated locally; whatever the caller sends goes into the
/// upstream request path as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DateOrLatest {
    #[default]
    Latest,
    On(String),
}

impl DateOrLatest {
    pub const LATEST: &'static str = "latest";

    /// Path segment sent to the provider.
    pub fn as_path_segment(&self) -> &str {
        match self {
            DateOrLatest::Latest => Self::LATEST,
            DateOrLatest::On(date) => date,
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, DateOrLatest::Latest)
    }
}

impl fmt::Display for DateOrLatest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path_segment())
    }
}

impl FromStr for DateOrLatest {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl From<&str> for DateOrLatest {
    fn from(s: &str) -> Self {
        if s == Self::LATEST {
            DateOrLatest::Latest
        } else {
            DateOrLatest::On(s.to_string())
        }
    }
}

impl From<String> for DateOrLatest {
    fn from(s: String) -> Self {
        if s == Self::LATEST {
            DateOrLatest::Latest
        } else {
            DateOrLatest::On(s)
        }
    }
}

impl Serialize for DateOrLatest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_path_segment())
    }
}

impl<'de> Deserialize<'de> for DateOrLatest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(DateOrLatest::from)
    }
}

/// A single exchange rate lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateQuery {
    pub from: CurrencyCode,
    pub to: CurrencyCode,
    #[serde(default)]
    pub date: DateOrLatest,
}

impl RateQuery {
    pub fn new(
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
        date: impl Into<DateOrLatest>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            date: date.into(),
        }
    }

    /// Latest rate between two currencies.
    pub fn latest(from: impl Into<CurrencyCode>, to: impl Into<CurrencyCode>) -> Self {
        Self::new(from, to, DateOrLatest::Latest)
    }
}

impl Default for RateQuery {
    fn default() -> Self {
        Self::latest(CurrencyCode::DEFAULT_FROM, CurrencyCode::DEFAULT_TO)
    }
}

impl fmt::Display for RateQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_is_usd_eur_latest() {
        let query = RateQuery::default();
        assert_eq!(query.from.as_str(), "USD");
        assert_eq!(query.to.as_str(), "EUR");
        assert_eq!(query.date, DateOrLatest::Latest);
    }

    #[test]
    fn test_latest_literal_parses_to_latest() {
        assert_eq!(DateOrLatest::from("latest"), DateOrLatest::Latest);
        assert_eq!(
            DateOrLatest::from("2024-01-15"),
            DateOrLatest::On("2024-01-15".to_string())
        );
    }

    #[test]
    fn test_malformed_date_is_kept_verbatim() {
        let date: DateOrLatest = "yesterday-ish".parse().unwrap();
        assert_eq!(date.as_path_segment(), "yesterday-ish");
        assert!(!date.is_latest());
    }

    #[test]
    fn test_date_serde_uses_plain_string() {
        let json = serde_json::to_string(&DateOrLatest::Latest).unwrap();
        assert_eq!(json, r#""latest""#);

        let parsed: DateOrLatest = serde_json::from_str(r#""2023-12-29""#).unwrap();
        assert_eq!(parsed, DateOrLatest::On("2023-12-29".into()));
    }

    #[test]
    fn test_query_display() {
        let query = RateQuery::new("GBP", "INR", "2024-03-01");
        assert_eq!(query.to_string(), "GBP -> INR (2024-03-01)");
    }
}
