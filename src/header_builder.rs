use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{WILDCARD, header};
use crate::exposed_headers::ExposedHeaders;
use crate::headers::HeaderCollection;
use crate::origin::AllowedOrigins;

/// Derives the two static header blocks a policy reuses for every request.
pub(crate) struct HeaderBuilder<'a> {
    pub(crate) origins: &'a AllowedOrigins,
    pub(crate) methods: &'a AllowedMethods,
    pub(crate) allowed_headers: &'a AllowedHeaders,
    pub(crate) exposed_headers: &'a ExposedHeaders,
    pub(crate) credentials: bool,
    pub(crate) max_age: u64,
}

impl HeaderBuilder<'_> {
    pub(crate) fn build_simple_block(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(3);
        if self.origins.allows_all() {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
        }
        headers.extend(self.build_credentials_header());
        if let Some(value) = self.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
        headers
    }

    pub(crate) fn build_preflight_block(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(5);
        if self.origins.allows_all() {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, WILDCARD);
        } else if self.origins.varies_by_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.methods.header_value(),
        );
        headers.push(header::ACCESS_CONTROL_MAX_AGE, self.max_age.to_string());
        if let Some(value) = self.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        headers.extend(self.build_credentials_header());
        headers
    }

    fn build_credentials_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::new();
        if self.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
