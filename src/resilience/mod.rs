//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Request to transport:
//!     → timeouts.rs (race the call against the deadline)
//!     → winner decides the outcome; loser detached or aborted
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every outgoing call has a deadline
//! - No retries: a timeout or network error is terminal for that call

pub mod timeouts;

pub use timeouts::{race_deadline, DeadlineElapsed};
