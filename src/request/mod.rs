//! Request model.
//!
//! # Data Flow
//! ```text
//! RequestOptions (caller)
//!     → normalize() (content-type defaulting)
//!     → NormalizedRequest
//!     → Transport::send
//! ```

pub mod headers;
pub mod options;

pub use headers::Headers;
pub use options::{normalize, Body, NormalizedRequest, RequestOptions};
pub use options::{DEFAULT_CONTENT_TYPE, DEFAULT_METHOD};
