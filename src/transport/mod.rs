//! Transport subsystem.
//!
//! # Responsibilities
//! - Define the seam between `RequestIssuer` and the network
//! - Provide the production HTTP implementation (reqwest)
//!
//! # Design Decisions
//! - `send` returns an owned `'static` future so the issuer can run it as its
//!   own task and walk away from it when the deadline wins
//! - Response and error types are associated types: the issuer hands both
//!   back to the caller without conversion

pub mod http_client;

use std::future::Future;

use crate::request::NormalizedRequest;

pub use http_client::{HttpTransport, TransportError};

/// Something that can carry a normalized request to an address.
pub trait Transport: Send + Sync {
    type Response: Send + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(
        &self,
        address: String,
        request: NormalizedRequest,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send + 'static;
}
