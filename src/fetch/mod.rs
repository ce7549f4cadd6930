//! Request issuance.
//!
//! # Responsibilities
//! - Normalize caller options into a transport-ready request
//! - Race the transport call against the request deadline
//! - Report dispatch and failure to the injected observer
//!
//! # Design Decisions
//! - No retries; a single timeout or network error ends the call
//! - Transport responses and errors reach the caller unmodified

pub mod error;
pub mod issuer;

pub use error::FetchError;
pub use issuer::RequestIssuer;
