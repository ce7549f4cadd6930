//! Metrics collection.
//!
//! # Metrics
//! - `fetch_requests_total` (counter): requests by method, outcome
//! - `fetch_request_duration_seconds` (histogram): latency distribution
//!
//! Recording goes through the `metrics` facade; without an installed
//! recorder every call is a no-op.

use std::time::Instant;

pub const OUTCOME_OK: &str = "ok";

/// Record one finished request.
pub fn record_request(method: &str, outcome: &'static str, start: Instant) {
    let method = method.to_string();
    metrics::counter!(
        "fetch_requests_total",
        "method" => method.clone(),
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("fetch_request_duration_seconds", "method" => method)
        .record(start.elapsed().as_secs_f64());
}
