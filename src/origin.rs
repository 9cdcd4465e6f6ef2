use crate::constants::WILDCARD;
use regex_automata::meta::{BuildError, Regex};
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// Compiled `allow_origin_regex`. Matching is anchored at both ends, so the
/// whole origin must match rather than any substring of it.
#[derive(Clone, Debug)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        // The raw pattern must compile on its own, otherwise an unbalanced
        // `)` would escape the anchoring group below.
        Regex::new(pattern).map_err(|err| PatternError::Build(Box::new(err)))?;
        let regex = Regex::new(&format!("^(?:{pattern})$"))
            .map_err(|err| PatternError::Build(Box::new(err)))?;

        Ok(Self {
            source: pattern.to_owned(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_full_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Origin admission rules derived from `origins` and `allow_origin_regex`.
#[derive(Clone, Debug)]
pub struct AllowedOrigins {
    origins: Vec<String>,
    pattern: Option<OriginPattern>,
    allow_all: bool,
}

impl AllowedOrigins {
    pub fn new(origins: Vec<String>, pattern: Option<OriginPattern>) -> Self {
        let allow_all = origins.iter().any(|origin| origin == WILDCARD);
        Self {
            origins,
            pattern,
            allow_all,
        }
    }

    pub fn allows_all(&self) -> bool {
        self.allow_all
    }

    pub fn pattern(&self) -> Option<&OriginPattern> {
        self.pattern.as_ref()
    }

    pub fn values(&self) -> &[String] {
        &self.origins
    }

    /// Whether responses depend on the request `Origin`: more than one
    /// discrete origin, or a pattern. Wildcard policies are checked separately.
    pub fn varies_by_origin(&self) -> bool {
        self.origins.len() > 1 || self.pattern.is_some()
    }

    /// Wildcard first, then the full-match pattern, then a *substring* test
    /// against each configured origin. `"example.com"` therefore admits
    /// `"https://api.example.com"` as well as `"https://example.com.evil"`.
    pub fn is_allowed(&self, origin: &str) -> bool {
        if self.allow_all {
            return true;
        }

        if let Some(pattern) = &self.pattern
            && pattern.is_full_match(origin)
        {
            return true;
        }

        self.origins
            .iter()
            .any(|allowed| origin.contains(allowed.as_str()))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
