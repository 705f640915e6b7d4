//! Bridge from unwinding panics to [`Outcome`] failures.
//!
//! [`outcome_from`] runs a closure and turns an unwinding panic raised inside
//! it into `Outcome::Failure(Fault)`. Conditions that abort instead of
//! unwinding (stack overflow, allocation failure, `panic = "abort"` builds)
//! cannot be observed here and keep propagating.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::fault::outcome_from;
//!
//! let ok = outcome_from(|| 1 + 1);
//! assert_eq!(ok.into_value(), Some(2));
//!
//! let failed = outcome_from(|| -> i32 { panic!("division by zero") });
//! assert_eq!(failed.into_failure().unwrap().message(), "division by zero");
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, UnwindSafe};

use crate::outcome::Outcome;

/// A recoverable fault captured from an unwinding panic.
///
/// Holds the original panic payload, so the fault can be inspected or
/// re-raised with [`Fault::resume`].
pub struct Fault {
    payload: Box<dyn Any + Send + 'static>,
}

impl Fault {
    /// Wraps a payload as returned by [`std::panic::catch_unwind`].
    #[inline]
    pub fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// Returns the panic message for `&str` and `String` payloads.
    ///
    /// Payloads of any other type are reported as `"Box<dyn Any>"`, matching
    /// the default panic hook.
    pub fn message(&self) -> &str {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            message
        } else if let Some(message) = self.payload.downcast_ref::<String>() {
            message.as_str()
        } else {
            "Box<dyn Any>"
        }
    }

    /// Borrows the raw panic payload.
    #[inline]
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        &*self.payload
    }

    /// Consumes the fault, returning the raw panic payload.
    #[inline]
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the captured panic with its original payload.
    pub fn resume(self) -> ! {
        panic::resume_unwind(self.payload)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault").field("message", &self.message()).finish()
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message())
    }
}

impl std::error::Error for Fault {}

/// Runs `block`, capturing an unwinding panic as `Failure(Fault)`.
///
/// A normal return becomes `Success`. Captured panics still go through the
/// installed panic hook before being caught.
///
/// The closure must be [`UnwindSafe`]; wrap it in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) when it captures
/// mutable state the caller knows is consistent after a panic.
///
/// # Examples
///
/// ```
/// use outcome_rail::fault::outcome_from;
///
/// let items: Vec<i32> = Vec::new();
/// let first = outcome_from(|| items[0]);
/// assert!(first.is_failure());
/// ```
pub fn outcome_from<T, F>(block: F) -> Outcome<T, Fault>
where
    F: FnOnce() -> T + UnwindSafe,
{
    match panic::catch_unwind(block) {
        Ok(value) => Outcome::Success(value),
        Err(payload) => Outcome::Failure(Fault::from_payload(payload)),
    }
}

/// Runs a fallible `block`, turning its `Err` into `Failure`.
///
/// Panics are not caught; combine with [`outcome_from`] for that.
///
/// # Examples
///
/// ```
/// use outcome_rail::fault::try_outcome_from;
/// use outcome_rail::Outcome;
///
/// let port = try_outcome_from(|| "8080".parse::<u16>());
/// assert_eq!(port, Outcome::Success(8080));
/// ```
#[inline]
pub fn try_outcome_from<T, E, F>(block: F) -> Outcome<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    Outcome::from_result(block())
}
