//! Resilient fetch: timeout-bounded HTTP request issuance.

pub mod config;
pub mod fetch;
pub mod observability;
pub mod request;
pub mod resilience;
pub mod transport;

pub use config::FetchConfig;
pub use fetch::{FetchError, RequestIssuer};
pub use request::{Body, Headers, RequestOptions};
pub use transport::{HttpTransport, Transport};
