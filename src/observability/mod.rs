//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! RequestIssuer produces:
//!     → sink.rs (dispatch / failure records through FetchObserver)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, pretty or JSON)
//!     → any installed metrics recorder
//! ```
//!
//! # Design Decisions
//! - The sink is injected, so tests observe records without capturing stdout
//! - Request ID flows through every record and the call's span

pub mod logging;
pub mod metrics;
pub mod sink;

pub use sink::{
    DispatchEvent, FailureEvent, FailureKind, FetchObserver, ObservedRecord, RecordingObserver,
    TracingObserver,
};
