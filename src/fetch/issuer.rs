//! Timeout-bounded request issuance.
//!
//! # Flow per call
//! ```text
//! RequestOptions
//!     → normalize (content-type defaulting)
//!     → observer.on_dispatch
//!     → race_deadline(transport.send, 30s)
//!         transport first → its response or its error, untouched
//!         deadline first  → FetchError::Timeout ("Request timeout")
//!     → observer.on_failure (failures only)
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::Instrument;
use uuid::Uuid;

use crate::config::schema::DEFAULT_REQUEST_TIMEOUT_MS;
use crate::config::{FetchConfig, TimeoutPolicy};
use crate::fetch::error::FetchError;
use crate::observability::metrics;
use crate::observability::{DispatchEvent, FailureEvent, FetchObserver, TracingObserver};
use crate::request::{normalize, RequestOptions, DEFAULT_METHOD};
use crate::resilience::race_deadline;
use crate::transport::Transport;

/// Issues single requests through a transport under a fixed deadline.
///
/// Stateless between calls; share it by reference or behind an `Arc`.
pub struct RequestIssuer<T> {
    transport: T,
    observer: Arc<dyn FetchObserver>,
    timeout: Duration,
    policy: TimeoutPolicy,
    default_method: String,
    metrics_enabled: bool,
}

impl<T: Transport> RequestIssuer<T> {
    /// Issuer with a 30 second deadline, detached losers and `tracing` output.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            observer: Arc::new(TracingObserver),
            timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            policy: TimeoutPolicy::Detach,
            default_method: DEFAULT_METHOD.to_string(),
            metrics_enabled: true,
        }
    }

    pub fn from_config(transport: T, config: &FetchConfig) -> Self {
        Self::new(transport)
            .with_timeout(config.timeouts.request())
            .with_timeout_policy(config.timeouts.on_timeout)
            .with_default_method(config.request.default_method.clone())
            .with_metrics(config.observability.metrics_enabled)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_timeout_policy(mut self, policy: TimeoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_default_method(mut self, method: impl Into<String>) -> Self {
        self.default_method = method.into();
        self
    }

    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.metrics_enabled = enabled;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send one request, racing it against the deadline.
    ///
    /// Returns the transport's response untouched, the transport's error inside
    /// `FetchError::Network`, or `FetchError::Timeout` if the deadline fired
    /// first. Every failure is reported to the observer before it is returned.
    pub async fn issue(
        &self,
        address: &str,
        options: RequestOptions,
    ) -> Result<T::Response, FetchError<T::Error>> {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("fetch", request_id = %request_id);
        self.issue_inner(request_id, address, options)
            .instrument(span)
            .await
    }

    async fn issue_inner(
        &self,
        request_id: Uuid,
        address: &str,
        options: RequestOptions,
    ) -> Result<T::Response, FetchError<T::Error>> {
        let start = Instant::now();
        let request = normalize(options, &self.default_method);
        let method = request.method.clone();

        self.observer.on_dispatch(&DispatchEvent {
            request_id,
            address,
            method: &method,
            headers: &request.headers,
        });
        tracing::debug!(
            body_len = request.body.as_ref().map(|b| b.len()),
            timeout = ?self.timeout,
            "Racing request against deadline"
        );

        let sent = self.transport.send(address.to_string(), request);
        let result = match race_deadline(sent, self.timeout, self.policy).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(e)) => Err(FetchError::Network(e)),
            Err(_elapsed) => Err(FetchError::Timeout),
        };

        match &result {
            Ok(_) => {
                if self.metrics_enabled {
                    metrics::record_request(&method, metrics::OUTCOME_OK, start);
                }
            }
            Err(e) => {
                let kind = e.kind();
                self.observer.on_failure(&FailureEvent {
                    request_id,
                    address,
                    method: &method,
                    kind,
                    error: e,
                });
                if self.metrics_enabled {
                    metrics::record_request(&method, kind.as_str(), start);
                }
            }
        }

        result
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RequestIssuer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestIssuer")
            .field("transport", &self.transport)
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .field("default_method", &self.default_method)
            .finish()
    }
}
