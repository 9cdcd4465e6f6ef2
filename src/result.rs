use crate::headers::Headers;
use crate::origin::PatternError;
use std::fmt;
use thiserror::Error;

pub const PREFLIGHT_ALLOWED_STATUS: u16 = 204;
pub const PREFLIGHT_DENIED_STATUS: u16 = 403;

/// Errors raised while building a policy from [`CorsOptions`](crate::CorsOptions).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid allow_origin_regex: {0}")]
    InvalidOriginPattern(#[from] PatternError),
}

/// A preflight gate that rejected the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreflightFailure {
    Origin,
    Method,
    Headers,
}

impl PreflightFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            PreflightFailure::Origin => "origin",
            PreflightFailure::Method => "method",
            PreflightFailure::Headers => "headers",
        }
    }
}

impl fmt::Display for PreflightFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthetic response for a preflight request. The inner application never
/// sees the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub status: u16,
    pub headers: Headers,
    pub body: String,
    pub failures: Vec<PreflightFailure>,
}

impl PreflightResult {
    pub(crate) fn new(headers: Headers, failures: Vec<PreflightFailure>) -> Self {
        if failures.is_empty() {
            return Self {
                status: PREFLIGHT_ALLOWED_STATUS,
                headers,
                body: String::new(),
                failures,
            };
        }

        let reasons = failures
            .iter()
            .map(PreflightFailure::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            status: PREFLIGHT_DENIED_STATUS,
            headers,
            body: format!("Disallowed CORS {reasons}"),
            failures,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Headers to merge into the inner application's response start. A `Vary`
/// entry is appended to the response's existing `Vary`; every other entry
/// replaces a same-named header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Overall decision returned by [`Cors::check`](crate::Cors::check).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Simple(SimpleResult),
    /// No `Origin`, or an OPTIONS request that is not a preflight.
    NotApplicable,
}
