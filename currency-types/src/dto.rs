//! Data Transfer Objects for the `get_exchange_rate` tool boundary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::{CurrencyCode, DateOrLatest, RateQuery};
use crate::error::{RateError, RateErrorKind};

/// Name under which the rate lookup is advertised to agents.
pub const GET_EXCHANGE_RATE_TOOL: &str = "get_exchange_rate";

// ─────────────────────────────────────────────────────────────────────────────
// Tool Arguments
// ─────────────────────────────────────────────────────────────────────────────

/// Arguments of the `get_exchange_rate` tool. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GetExchangeRateArgs {
    /// The currency to convert from (e.g., "USD").
    #[serde(default = "default_currency_from")]
    pub currency_from: String,
    /// The currency to convert to (e.g., "EUR").
    #[serde(default = "default_currency_to")]
    pub currency_to: String,
    /// The date for the exchange rate or "latest". Defaults to "latest".
    #[serde(default = "default_currency_date")]
    pub currency_date: String,
}

fn default_currency_from() -> String {
    CurrencyCode::DEFAULT_FROM.to_string()
}

fn default_currency_to() -> String {
    CurrencyCode::DEFAULT_TO.to_string()
}

fn default_currency_date() -> String {
    DateOrLatest::LATEST.to_string()
}

impl Default for GetExchangeRateArgs {
    fn default() -> Self {
        Self {
            currency_from: default_currency_from(),
            currency_to: default_currency_to(),
            currency_date: default_currency_date(),
        }
    }
}

impl From<GetExchangeRateArgs> for RateQuery {
    fn from(args: GetExchangeRateArgs) -> Self {
        RateQuery::new(args.currency_from, args.currency_to, args.currency_date)
    }
}

impl From<&RateQuery> for GetExchangeRateArgs {
    fn from(query: &RateQuery) -> Self {
        Self {
            currency_from: query.from.to_string(),
            currency_to: query.to.to_string(),
            currency_date: query.date.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tool Errors
// ─────────────────────────────────────────────────────────────────────────────

/// Payload of a failed tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateErrorBody {
    pub kind: RateErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Human readable description
    pub error: String,
    /// Detail carried by the error variant, used to rebuild it on the caller side
    #[serde(default)]
    pub detail: String,
}

impl From<&RateError> for RateErrorBody {
    fn from(err: &RateError) -> Self {
        let detail = match err {
            RateError::UpstreamUnavailable { reason, .. } => reason.clone(),
            RateError::MalformedUpstreamResponse(d) | RateError::UnexpectedShape(d) => d.clone(),
        };
        Self {
            kind: err.kind(),
            status: err.status(),
            error: err.to_string(),
            detail,
        }
    }
}

impl From<RateErrorBody> for RateError {
    fn from(body: RateErrorBody) -> Self {
        match body.kind {
            RateErrorKind::UpstreamUnavailable => RateError::UpstreamUnavailable {
                status: body.status,
                reason: body.detail,
            },
            RateErrorKind::MalformedUpstreamResponse => {
                RateError::MalformedUpstreamResponse(body.detail)
            }
            RateErrorKind::UnexpectedShape => RateError::UnexpectedShape(body.detail),
        }
    }
}
