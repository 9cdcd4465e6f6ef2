//! Framework-neutral request and response-event types.
//!
//! A server adapter turns its own request type into a [`Request`] and its
//! response writer into a [`ResponseSink`]. Applications emit exactly one
//! [`ResponseEvent::Start`] followed by one or more [`ResponseEvent::Body`]
//! events, the last with `more == false`.

use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::merge_vary;
use crate::util::equals_ignore_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestKind {
    #[default]
    Http,
    WebSocket,
}

/// Inbound request as seen by the middleware: method plus raw header pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Request {
    pub kind: RequestKind,
    pub method: String,
    pub headers: Vec<(String, String)>,
}

impl Request {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Http,
            method: method.into(),
            headers: Vec::new(),
        }
    }

    pub fn websocket() -> Self {
        Self {
            kind: RequestKind::WebSocket,
            method: "GET".into(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// First value of `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| equals_ignore_case(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    pub fn context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.header(header::ORIGIN),
            has_cookie: self.has_header(header::COOKIE),
            access_control_request_method: self.header(header::ACCESS_CONTROL_REQUEST_METHOD),
            access_control_request_headers: self.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
        }
    }
}

/// Ordered response header pairs. Duplicate names are allowed, as on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseHeaders {
    entries: Vec<(String, String)>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| equals_ignore_case(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .iter()
            .filter(move |(key, _)| equals_ignore_case(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Replaces every existing `name` entry with a single one. The new entry
    /// takes the position of the first one removed, or goes last.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        let position = self
            .entries
            .iter()
            .position(|(key, _)| equals_ignore_case(key, &name));
        self.entries.retain(|(key, _)| !equals_ignore_case(key, &name));

        match position {
            Some(index) => self.entries.insert(index, (name, value)),
            None => self.entries.push((name, value)),
        }
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Adds `value` to the `Vary` header, keeping whatever is already there.
    pub fn add_vary(&mut self, value: &str) {
        let existing = self.get_all(header::VARY).collect::<Vec<_>>().join(", ");
        let existing = (!existing.is_empty()).then_some(existing.as_str());

        if let Some(merged) = merge_vary(existing, value) {
            self.set(header::VARY, merged);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<N, V> FromIterator<(N, V)> for ResponseHeaders
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for ResponseHeaders {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseStart {
    pub status: u16,
    pub headers: ResponseHeaders,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody {
    pub chunk: Vec<u8>,
    /// `false` on the final chunk.
    pub more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseEvent {
    Start(ResponseStart),
    Body(ResponseBody),
}

impl ResponseEvent {
    pub fn start(status: u16, headers: ResponseHeaders) -> Self {
        Self::Start(ResponseStart { status, headers })
    }

    pub fn body(chunk: impl Into<Vec<u8>>, more: bool) -> Self {
        Self::Body(ResponseBody {
            chunk: chunk.into(),
            more,
        })
    }
}

/// Destination for the events an application emits.
pub trait ResponseSink {
    fn send(&mut self, event: ResponseEvent);
}

impl ResponseSink for Vec<ResponseEvent> {
    fn send(&mut self, event: ResponseEvent) {
        self.push(event);
    }
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    fn send(&mut self, event: ResponseEvent) {
        (**self).send(event);
    }
}

/// An HTTP application: consumes a request and writes its response into the
/// sink. This is the only calling convention the middleware supports.
pub trait Application: Send + Sync {
    fn call(&self, request: &Request, sink: &mut dyn ResponseSink);
}

impl<F> Application for F
where
    F: Fn(&Request, &mut dyn ResponseSink) + Send + Sync,
{
    fn call(&self, request: &Request, sink: &mut dyn ResponseSink) {
        self(request, sink)
    }
}

/// Pins a closure to the [`Application`] signature so its argument lifetimes
/// are inferred as higher-ranked.
pub fn application_fn<F>(f: F) -> F
where
    F: Fn(&Request, &mut dyn ResponseSink) + Send + Sync,
{
    f
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
