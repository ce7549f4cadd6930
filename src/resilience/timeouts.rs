//! Timeout enforcement.
//!
//! # Responsibilities
//! - Race an operation against a deadline
//! - Decide the fate of the losing operation (detach or abort)
//!
//! # Design Decisions
//! - The operation runs as its own Tokio task, so detaching really leaves it
//!   running in the background
//! - Timeout errors are distinct from the operation's own errors
//! - A timer that loses is dropped and never fires

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio::task::JoinError;

use crate::config::TimeoutPolicy;

/// The deadline settled before the operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline of {0:?} elapsed")]
pub struct DeadlineElapsed(pub Duration);

/// Run `operation` against `deadline`; the first to settle decides the outcome.
///
/// When the deadline wins, the operation is detached or aborted per `policy`.
/// A panic inside the operation resumes in the caller.
pub async fn race_deadline<F>(
    operation: F,
    deadline: Duration,
    policy: TimeoutPolicy,
) -> Result<F::Output, DeadlineElapsed>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    let mut handle = tokio::spawn(operation);

    tokio::select! {
        joined = &mut handle => Ok(unwrap_joined(joined)),
        _ = tokio::time::sleep(deadline) => {
            match policy {
                TimeoutPolicy::Detach => drop(handle),
                TimeoutPolicy::Abort => handle.abort(),
            }
            Err(DeadlineElapsed(deadline))
        }
    }
}

fn unwrap_joined<T>(joined: Result<T, JoinError>) -> T {
    match joined {
        Ok(output) => output,
        Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
        // Only this module aborts the task, and only after it stopped polling it.
        Err(e) => unreachable!("operation task cancelled while awaited: {e}"),
    }
}
