//! Observability sink injected into the request issuer.
//!
//! The issuer reports two kinds of records: one dispatch record before every
//! call and one failure record for every call that fails. What happens to them
//! is up to the `FetchObserver` implementation.

use std::fmt;
use std::sync::Mutex;

use uuid::Uuid;

use crate::request::Headers;

const REDACTED_HEADERS: [&str; 5] = [
    "authorization",
    "proxy-authorization",
    "cookie",
    "apikey",
    "x-api-key",
];

/// Why a call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Network,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Network => "network_error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emitted before the request leaves.
#[derive(Debug, Clone, Copy)]
pub struct DispatchEvent<'a> {
    pub request_id: Uuid,
    pub address: &'a str,
    pub method: &'a str,
    pub headers: &'a Headers,
}

/// Emitted after a failure, before the error reaches the caller.
#[derive(Debug, Clone, Copy)]
pub struct FailureEvent<'a> {
    pub request_id: Uuid,
    pub address: &'a str,
    pub method: &'a str,
    pub kind: FailureKind,
    pub error: &'a (dyn std::error::Error + 'static),
}

pub trait FetchObserver: Send + Sync {
    fn on_dispatch(&self, event: &DispatchEvent<'_>);

    fn on_failure(&self, event: &FailureEvent<'_>);
}

/// Default sink: structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FetchObserver for TracingObserver {
    fn on_dispatch(&self, event: &DispatchEvent<'_>) {
        tracing::info!(
            request_id = %event.request_id,
            address = %event.address,
            method = %event.method,
            headers = %redact(event.headers),
            "Dispatching request"
        );
    }

    fn on_failure(&self, event: &FailureEvent<'_>) {
        tracing::error!(
            request_id = %event.request_id,
            address = %event.address,
            method = %event.method,
            kind = %event.kind,
            error = %event.error,
            "Request failed"
        );
    }
}

/// Copy of `headers` with credential values masked, for log output only.
pub fn redact(headers: &Headers) -> Headers {
    let mut redacted = headers.clone();
    for name in REDACTED_HEADERS {
        if redacted.contains(name) {
            redacted.set(name, "[redacted]");
        }
    }
    redacted
}

/// Owned copy of an observer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedRecord {
    Dispatch {
        request_id: Uuid,
        address: String,
        method: String,
        headers: Headers,
    },
    Failure {
        request_id: Uuid,
        address: String,
        method: String,
        kind: FailureKind,
        message: String,
    },
}

/// Sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    records: Mutex<Vec<ObservedRecord>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ObservedRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn failures(&self) -> Vec<ObservedRecord> {
        self.records()
            .into_iter()
            .filter(|r| matches!(r, ObservedRecord::Failure { .. }))
            .collect()
    }

    fn push(&self, record: ObservedRecord) {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

impl FetchObserver for RecordingObserver {
    fn on_dispatch(&self, event: &DispatchEvent<'_>) {
        self.push(ObservedRecord::Dispatch {
            request_id: event.request_id,
            address: event.address.to_string(),
            method: event.method.to_string(),
            headers: event.headers.clone(),
        });
    }

    fn on_failure(&self, event: &FailureEvent<'_>) {
        self.push(ObservedRecord::Failure {
            request_id: event.request_id,
            address: event.address.to_string(),
            method: event.method.to_string(),
            kind: event.kind,
            message: event.error.to_string(),
        });
    }
}
