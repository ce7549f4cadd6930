//! HTTP transport backed by `reqwest`.

use std::future::Future;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, Response};
use thiserror::Error;

use crate::config::FetchConfig;
use crate::request::NormalizedRequest;
use crate::transport::Transport;

/// Failures produced while building or sending an HTTP request.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid URL '{address}': {source}")]
    InvalidUrl {
        address: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid HTTP method '{0}'")]
    InvalidMethod(String),

    #[error("invalid header '{0}'")]
    InvalidHeader(String),

    #[error("network request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Production transport. Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a client with the configured connect timeout and user agent.
    ///
    /// No overall request timeout is set on the client; the issuer owns the deadline.
    pub fn from_config(config: &FetchConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(config.timeouts.connect())
            .user_agent(config.request.user_agent.clone())
            .build()?;
        Ok(Self::new(client))
    }

    fn build(
        &self,
        address: &str,
        request: NormalizedRequest,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        let url = url::Url::parse(address).map_err(|source| TransportError::InvalidUrl {
            address: address.to_string(),
            source,
        })?;
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| TransportError::InvalidMethod(request.method.clone()))?;

        let mut headers = reqwest::header::HeaderMap::with_capacity(request.headers.len());
        for (name, value) in request.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader(name.to_string()))?;
            headers.insert(header_name, header_value);
        }

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body.into_bytes());
        }
        Ok(builder)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl Transport for HttpTransport {
    type Response = Response;
    type Error = TransportError;

    fn send(
        &self,
        address: String,
        request: NormalizedRequest,
    ) -> impl Future<Output = Result<Response, TransportError>> + Send + 'static {
        let built = self.build(&address, request);
        async move {
            let response = built?.send().await?;
            Ok::<_, TransportError>(response)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{normalize, RequestOptions, DEFAULT_METHOD};

    fn request(options: RequestOptions) -> NormalizedRequest {
        normalize(options, DEFAULT_METHOD)
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let transport = HttpTransport::default();
        let err = transport
            .send("not a url".to_string(), request(RequestOptions::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidUrl { .. }));
    }

    #[tokio::test]
    async fn test_invalid_method() {
        let transport = HttpTransport::default();
        let err = transport
            .send(
                "http://127.0.0.1:9/".to_string(),
                request(RequestOptions::new().method("BAD METHOD")),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidMethod(m) if m == "BAD METHOD"));
    }

    #[tokio::test]
    async fn test_invalid_header_value() {
        let transport = HttpTransport::default();
        let err = transport
            .send(
                "http://127.0.0.1:9/".to_string(),
                request(RequestOptions::new().header("X-Bad", "line\nbreak")),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader(name) if name == "x-bad"));
    }

    #[test]
    fn test_build_carries_method_headers_and_body() {
        let transport = HttpTransport::default();
        let built = transport
            .build(
                "http://example.com/items",
                request(RequestOptions::new().method("POST").body("{}")),
            )
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.url().as_str(), "http://example.com/items");
        assert_eq!(built.headers()["content-type"], "application/json");
        assert_eq!(built.body().and_then(|b| b.as_bytes()), Some(&b"{}"[..]));
    }
}
