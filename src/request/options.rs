//! Caller-facing request description and its normalized form.

use serde::Serialize;

use crate::request::headers::{Headers, CONTENT_TYPE};

/// Content type injected when a body is supplied without one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

pub const DEFAULT_METHOD: &str = "GET";

/// Request payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
}

impl Body {
    /// Serialize any value into a JSON body.
    pub fn json<T: Serialize>(value: &T) -> serde_json::Result<Self> {
        serde_json::to_value(value).map(Body::Json)
    }

    /// Raw bytes as they go on the wire.
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Text(text) => text.into_bytes(),
            Body::Bytes(bytes) => bytes,
            Body::Json(value) => value.to_string().into_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Body::Text(text) => text.len(),
            Body::Bytes(bytes) => bytes.len(),
            Body::Json(value) => value.to_string().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this body counts as supplied for content-type defaulting.
    ///
    /// An empty text body does not; byte and JSON bodies always do, even empty.
    pub fn is_present(&self) -> bool {
        match self {
            Body::Text(text) => !text.is_empty(),
            Body::Bytes(_) | Body::Json(_) => true,
        }
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Body::Bytes(bytes)
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Body::Json(value)
    }
}

/// Outgoing request as the caller describes it.
///
/// `method` left as `None` means the issuer's default method ("GET" unless
/// configured otherwise).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: Headers,
    pub body: Option<Body>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Replace the header set. Accepts pair lists, maps, or a prepared `Headers`.
    pub fn headers(mut self, headers: impl Into<Headers>) -> Self {
        self.headers = headers.into();
        self
    }

    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Request after header defaulting, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    pub method: String,
    pub headers: Headers,
    pub body: Option<Body>,
}

/// Apply header defaulting.
///
/// A present body (see [`Body::is_present`]) with no content type in any
/// casing gains `content-type: application/json`. Nothing else is touched.
pub fn normalize(options: RequestOptions, default_method: &str) -> NormalizedRequest {
    let RequestOptions {
        method,
        mut headers,
        body,
    } = options;

    if body.as_ref().is_some_and(Body::is_present) && !headers.contains(CONTENT_TYPE) {
        headers.set(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
    }

    NormalizedRequest {
        method: method.unwrap_or_else(|| default_method.to_string()),
        headers,
        body,
    }
}
