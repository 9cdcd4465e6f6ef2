mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
pub mod middleware;
mod options;
mod origin;
mod policy;
mod result;
pub mod transport;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use middleware::{CorsMiddleware, CorsSink};
pub use options::CorsOptions;
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use policy::CorsPolicy;
pub use result::{
    ConfigError, CorsDecision, PREFLIGHT_ALLOWED_STATUS, PREFLIGHT_DENIED_STATUS,
    PreflightFailure, PreflightResult, SimpleResult,
};
pub use transport::{
    Application, Request, RequestKind, ResponseBody, ResponseEvent, ResponseHeaders, ResponseSink,
    ResponseStart, application_fn,
};
