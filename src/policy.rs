use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::origin::{AllowedOrigins, OriginPattern};
use crate::result::ConfigError;

/// Normalized decision table derived once from [`CorsOptions`].
///
/// Nothing here changes after construction, so a single instance can be read
/// from any number of threads without locking. Rebuild to reconfigure.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: AllowedOrigins,
    methods: AllowedMethods,
    allowed_headers: AllowedHeaders,
    exposed_headers: ExposedHeaders,
    credentials: bool,
    max_age: u64,
    simple_headers: Headers,
    preflight_headers: Headers,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ConfigError> {
        let CorsOptions {
            origins,
            allow_methods,
            allow_headers,
            allow_credentials,
            allow_origin_regex,
            expose_headers,
            max_age,
        } = options;

        let pattern = allow_origin_regex
            .as_deref()
            .map(OriginPattern::new)
            .transpose()?;

        let origins = AllowedOrigins::new(origins, pattern);
        let methods = AllowedMethods::list(allow_methods);
        let allowed_headers = AllowedHeaders::list(allow_headers);
        let exposed_headers = ExposedHeaders::list(expose_headers);

        let builder = HeaderBuilder {
            origins: &origins,
            methods: &methods,
            allowed_headers: &allowed_headers,
            exposed_headers: &exposed_headers,
            credentials: allow_credentials,
            max_age,
        };
        let simple_headers = builder.build_simple_block().into_headers();
        let preflight_headers = builder.build_preflight_block().into_headers();

        tracing::debug!(
            allow_all_origins = origins.allows_all(),
            origins = origins.values().len(),
            pattern = origins.pattern().map(OriginPattern::as_str),
            methods = %methods.header_value(),
            allow_all_headers = allowed_headers.allows_all(),
            credentials = allow_credentials,
            max_age,
            "built CORS policy"
        );

        Ok(Self {
            origins,
            methods,
            allowed_headers,
            exposed_headers,
            credentials: allow_credentials,
            max_age,
            simple_headers,
            preflight_headers,
        })
    }

    pub fn origins(&self) -> &AllowedOrigins {
        &self.origins
    }

    pub fn methods(&self) -> &AllowedMethods {
        &self.methods
    }

    pub fn allowed_headers(&self) -> &AllowedHeaders {
        &self.allowed_headers
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn allows_credentials(&self) -> bool {
        self.credentials
    }

    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// Merged into every simple response.
    pub fn simple_headers(&self) -> &Headers {
        &self.simple_headers
    }

    /// Starting point of every preflight response.
    pub fn preflight_headers(&self) -> &Headers {
        &self.preflight_headers
    }

    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.origins.is_allowed(origin)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
