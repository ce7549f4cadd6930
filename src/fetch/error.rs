//! Issuer error type.

use thiserror::Error;

use crate::observability::FailureKind;

/// Outcome of a failed `issue` call.
///
/// `Network` carries the transport's own error, unwrapped and unchanged.
#[derive(Debug, Error)]
pub enum FetchError<E> {
    #[error("Request timeout")]
    Timeout,

    #[error(transparent)]
    Network(E),
}

impl<E> FetchError<E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout)
    }

    /// The transport error, if this was not a timeout.
    pub fn into_network(self) -> Option<E> {
        match self {
            FetchError::Network(e) => Some(e),
            FetchError::Timeout => None,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Timeout => FailureKind::Timeout,
            FetchError::Network(_) => FailureKind::Network,
        }
    }
}
