//! Error types for the exchange rate lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a rate lookup produced no rate.
///
/// A lookup either returns a genuine upstream value or one of these; there is
/// no fallback rate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RateError {
    /// Network failure or non-success HTTP status from the provider.
    #[error("API request failed: {}", describe_upstream(.status, .reason))]
    UpstreamUnavailable { status: Option<u16>, reason: String },

    /// The provider answered, but the body is not valid JSON.
    #[error("Invalid JSON response from API: {0}")]
    MalformedUpstreamResponse(String),

    /// The body is JSON, but not a rate payload.
    #[error("Invalid API response format: {0}")]
    UnexpectedShape(String),
}

fn describe_upstream(status: &Option<u16>, reason: &str) -> String {
    match status {
        Some(code) => format!("HTTP {code}: {reason}"),
        None => reason.to_string(),
    }
}

impl RateError {
    pub fn upstream(status: Option<u16>, reason: impl Into<String>) -> Self {
        RateError::UpstreamUnavailable {
            status,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> RateErrorKind {
        match self {
            RateError::UpstreamUnavailable { .. } => RateErrorKind::UpstreamUnavailable,
            RateError::MalformedUpstreamResponse(_) => RateErrorKind::MalformedUpstreamResponse,
            RateError::UnexpectedShape(_) => RateErrorKind::UnexpectedShape,
        }
    }

    /// HTTP status reported by the provider, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RateError::UpstreamUnavailable { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether calling again later may succeed. True for transport failures
    /// and for 5xx or 429 answers.
    pub fn is_transient(&self) -> bool {
        match self {
            RateError::UpstreamUnavailable { status, .. } => {
                status.is_none_or(|code| code >= 500 || code == 429)
            }
            _ => false,
        }
    }
}

/// Discriminant of [`RateError`], used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateErrorKind {
    UpstreamUnavailable,
    MalformedUpstreamResponse,
    UnexpectedShape,
}

impl fmt::Display for RateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RateErrorKind::UpstreamUnavailable => "upstream_unavailable",
            RateErrorKind::MalformedUpstreamResponse => "malformed_upstream_response",
            RateErrorKind::UnexpectedShape => "unexpected_shape",
        };
        f.write_str(s)
    }
}
