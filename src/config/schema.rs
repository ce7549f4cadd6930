//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the fetch client.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Deadline applied to every request when nothing else is configured.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Root configuration for the fetch client.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FetchConfig {
    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Request defaults.
    pub request: RequestConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// What happens to the in-flight transport call once the deadline wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeoutPolicy {
    /// Leave the call running with no observer.
    #[default]
    Detach,
    /// Cancel the call.
    Abort,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Deadline for the whole request race in milliseconds.
    pub request_ms: u64,

    /// Connection establishment timeout in milliseconds (transport level).
    pub connect_ms: u64,

    /// Loser policy when the deadline fires first.
    pub on_timeout: TimeoutPolicy,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }

    pub fn connect(&self) -> Duration {
        Duration::from_millis(self.connect_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            request_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            connect_ms: 10_000,
            on_timeout: TimeoutPolicy::Detach,
        }
    }
}

/// Defaults applied when building requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RequestConfig {
    /// Method used when the caller does not name one.
    pub default_method: String,

    /// User-Agent sent by the HTTP transport.
    pub user_agent: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            default_method: "GET".to_string(),
            user_agent: concat!("resilient-fetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Record request counters and latency histograms.
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
        }
    }
}
