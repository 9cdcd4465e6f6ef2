use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::policy::CorsPolicy;
use crate::result::{ConfigError, CorsDecision, PreflightFailure, PreflightResult, SimpleResult};

/// Core CORS policy engine that evaluates requests against a [`CorsPolicy`].
///
/// `Cors` holds no per-request state. Share one instance (for example behind
/// an `Arc`) across every worker.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_policy(CorsPolicy::new(options)?))
    }

    pub fn from_policy(policy: CorsPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &CorsPolicy {
        &self.policy
    }

    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.policy.is_allowed_origin(origin)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let Some(origin) = request.origin else {
            tracing::trace!(method = request.method, "no Origin header, passing through");
            return CorsDecision::NotApplicable;
        };

        if request.method == method::OPTIONS {
            return match request.access_control_request_method {
                Some(requested_method) => CorsDecision::Preflight(self.process_preflight(
                    origin,
                    requested_method,
                    request.access_control_request_headers,
                )),
                None => {
                    tracing::trace!(origin, "OPTIONS without Access-Control-Request-Method");
                    CorsDecision::NotApplicable
                }
            };
        }

        CorsDecision::Simple(self.process_simple(origin, request.has_cookie))
    }

    fn process_preflight(
        &self,
        origin: &str,
        requested_method: &str,
        requested_headers: Option<&str>,
    ) -> PreflightResult {
        let policy = &self.policy;
        let mut headers = HeaderCollection::from_headers(policy.preflight_headers());
        let mut failures = Vec::with_capacity(3);

        if policy.is_allowed_origin(origin) {
            if !policy.origins().allows_all() {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            }
        } else {
            failures.push(PreflightFailure::Origin);
        }

        if !policy.methods().allows_method(requested_method) {
            failures.push(PreflightFailure::Method);
        }

        if let Some(requested_headers) = requested_headers {
            if policy.allowed_headers().allows_all() {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, requested_headers);
            } else if !policy.allowed_headers().allows_headers(requested_headers) {
                failures.push(PreflightFailure::Headers);
            }
        }

        let result = PreflightResult::new(headers.into_headers(), failures);
        if result.is_allowed() {
            tracing::trace!(origin, requested_method, "preflight allowed");
        } else {
            tracing::debug!(
                origin,
                requested_method,
                requested_headers,
                failures = ?result.failures,
                "preflight denied"
            );
        }
        result
    }

    fn process_simple(&self, origin: &str, has_cookie: bool) -> SimpleResult {
        let policy = &self.policy;
        let mut headers = HeaderCollection::from_headers(policy.simple_headers());
        let allow_all = policy.origins().allows_all();

        if allow_all && has_cookie {
            // `*` is ignored by browsers on credentialed requests.
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        } else if !allow_all && policy.is_allowed_origin(origin) {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            if policy.origins().varies_by_origin() {
                headers.add_vary(header::ORIGIN);
            }
        } else if !allow_all {
            tracing::debug!(origin, "simple request origin not allowed");
        }

        SimpleResult {
            headers: headers.into_headers(),
        }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
