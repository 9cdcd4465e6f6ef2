use crate::constants::WILDCARD;
use crate::util::{lower_tokens, normalize_lower};
use std::collections::HashSet;

/// Request headers a preflight may declare.
///
/// Browser-safelisted headers (`Accept`, `Content-Type`, ...) are not added
/// implicitly; listing them explicitly lifts the browser's extra value
/// restrictions, which only the operator should opt into.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AllowedHeaders {
    /// Deduplicated and sorted, as configured.
    values: Vec<String>,
    lowered: HashSet<String>,
    allow_all: bool,
}

impl AllowedHeaders {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values: Vec<String> = values.into_iter().map(Into::into).collect();
        values.sort();
        values.dedup();

        let allow_all = values.iter().any(|value| value == WILDCARD);
        let lowered = values.iter().map(|value| normalize_lower(value)).collect();

        Self {
            values,
            lowered,
            allow_all,
        }
    }

    pub fn allows_all(&self) -> bool {
        self.allow_all
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Checks every token of an `Access-Control-Request-Headers` value.
    pub fn allows_headers(&self, requested: &str) -> bool {
        if self.allow_all {
            return true;
        }

        lower_tokens(requested).all(|token| self.lowered.contains(&token))
    }

    /// `None` for an empty list or a wildcard: the wildcard echoes the request
    /// instead of advertising a fixed list.
    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() || self.allow_all {
            None
        } else {
            Some(self.values.join(", "))
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
