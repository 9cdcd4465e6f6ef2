use crate::constants::{DEFAULT_MAX_AGE, method};

/// Raw configuration for a [`Cors`](crate::Cors) instance.
///
/// Values are taken as given; normalization (wildcard expansion, sorting,
/// regex compilation) happens once when the policy is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsOptions {
    /// Origins admitted by substring match. `"*"` admits every origin.
    pub origins: Vec<String>,
    /// Methods a preflight may request. `"*"` expands to
    /// `DELETE, GET, PATCH, POST, PUT`.
    pub allow_methods: Vec<String>,
    /// Request headers a preflight may declare. `"*"` admits any header.
    pub allow_headers: Vec<String>,
    pub allow_credentials: bool,
    /// Pattern an origin must match in full to be admitted.
    pub allow_origin_regex: Option<String>,
    pub expose_headers: Vec<String>,
    /// Seconds a browser may cache a preflight result.
    pub max_age: u64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: Vec::new(),
            allow_methods: vec![method::GET.into()],
            allow_headers: Vec::new(),
            allow_credentials: false,
            allow_origin_regex: None,
            expose_headers: Vec::new(),
            max_age: DEFAULT_MAX_AGE,
        }
    }
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn allow_origin_regex(mut self, pattern: impl Into<String>) -> Self {
        self.allow_origin_regex = Some(pattern.into());
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = seconds;
        self
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
