use crate::constants::{TEXT_PLAIN_UTF8, header};
use crate::cors::Cors;
use crate::headers::Headers;
use crate::options::CorsOptions;
use crate::result::{ConfigError, CorsDecision, PreflightResult};
use crate::transport::{
    Application, Request, RequestKind, ResponseEvent, ResponseHeaders, ResponseSink,
};
use std::sync::Arc;

/// Wraps an inner [`Application`] and enforces a CORS policy around it.
///
/// Preflight requests are answered directly. Every other request is forwarded,
/// and the response start it emits is annotated with the policy's headers.
pub struct CorsMiddleware<A> {
    inner: A,
    cors: Arc<Cors>,
}

impl<A: Application> CorsMiddleware<A> {
    pub fn new(inner: A, cors: Arc<Cors>) -> Self {
        Self { inner, cors }
    }

    pub fn from_options(inner: A, options: CorsOptions) -> Result<Self, ConfigError> {
        Ok(Self::new(inner, Arc::new(Cors::new(options)?)))
    }

    pub fn cors(&self) -> &Arc<Cors> {
        &self.cors
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Application> Application for CorsMiddleware<A> {
    fn call(&self, request: &Request, sink: &mut dyn ResponseSink) {
        if request.kind != RequestKind::Http {
            return self.inner.call(request, sink);
        }

        match self.cors.check(&request.context()) {
            CorsDecision::Preflight(result) => send_preflight(result, sink),
            CorsDecision::Simple(result) => {
                let mut sink = CorsSink::new(sink, result.headers);
                self.inner.call(request, &mut sink);
            }
            CorsDecision::NotApplicable => self.inner.call(request, sink),
        }
    }
}

fn send_preflight(result: PreflightResult, sink: &mut dyn ResponseSink) {
    let mut headers: ResponseHeaders = result.headers.into_iter().collect();
    if !result.body.is_empty() {
        headers.set(header::CONTENT_LENGTH, result.body.len().to_string());
        headers.set(header::CONTENT_TYPE, TEXT_PLAIN_UTF8);
    }

    sink.send(ResponseEvent::start(result.status, headers));
    sink.send(ResponseEvent::body(result.body, false));
}

/// Sink decorator that merges CORS headers into the first response start it
/// forwards. Body events, and any start after the first, pass through as-is.
pub struct CorsSink<'a> {
    inner: &'a mut dyn ResponseSink,
    pending: Option<Headers>,
}

impl<'a> CorsSink<'a> {
    pub fn new(inner: &'a mut dyn ResponseSink, headers: Headers) -> Self {
        Self {
            inner,
            pending: Some(headers),
        }
    }
}

impl ResponseSink for CorsSink<'_> {
    fn send(&mut self, mut event: ResponseEvent) {
        if let ResponseEvent::Start(start) = &mut event
            && let Some(headers) = self.pending.take()
        {
            apply_headers(&mut start.headers, headers);
        }
        self.inner.send(event);
    }
}

fn apply_headers(target: &mut ResponseHeaders, headers: Headers) {
    for (name, value) in headers {
        if name.eq_ignore_ascii_case(header::VARY) {
            target.add_vary(&value);
        } else {
            target.set(name, value);
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
