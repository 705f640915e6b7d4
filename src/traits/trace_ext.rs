//! Tracing taps for [`Outcome`].
//!
//! The library never logs on its own. These taps let a caller opt in to
//! recording an outcome as a `tracing` event at a chosen point of a chain,
//! returning the outcome unchanged.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use crate::outcome::Outcome;

/// Extension trait emitting `tracing` events for outcomes.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::traits::OutcomeTraceExt;
///
/// let user = load_user(id)
///     .trace_failure("loading user")
///     .recover(|_| User::guest());
/// ```
pub trait OutcomeTraceExt<T, E>: Sized {
    /// Emits a `WARN` event carrying the failure reason when the outcome is a
    /// `Failure`. Successes pass through silently.
    fn trace_failure(self, label: &str) -> Self;

    /// Emits a `DEBUG` event carrying the success value when the outcome is a
    /// `Success`. Failures pass through silently.
    fn trace_success(self, label: &str) -> Self;
}

impl<T: Debug, E: Debug> OutcomeTraceExt<T, E> for Outcome<T, E> {
    fn trace_failure(self, label: &str) -> Self {
        self.peek_failure(|reason| {
            tracing::warn!(label = label, reason = ?reason, "outcome failed");
        })
    }

    fn trace_success(self, label: &str) -> Self {
        self.peek(|value| {
            tracing::debug!(label = label, value = ?value, "outcome succeeded");
        })
    }
}
