//! Conversion helpers between `Outcome`, `Option`, and `Result`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges
//! of existing code: wrap an optional lookup with a lazily built failure
//! reason, or hand an outcome back to APIs (and the `?` operator) that speak
//! plain `Result`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! // Option -> Outcome
//! let found = as_outcome_or(Some(3), || "not found");
//! assert_eq!(found, Outcome::Success(3));
//!
//! // Outcome <-> Result
//! let result: Result<i32, &str> = outcome_to_result(Outcome::Failure("bad"));
//! assert_eq!(result, Err("bad"));
//! assert_eq!(result_to_outcome(result), Outcome::Failure("bad"));
//! ```

use crate::outcome::Outcome;

/// Converts an optional value into an `Outcome`.
///
/// `failure_supplier` is only invoked (exactly once) when the value is `None`,
/// so it may be expensive, e.g. building a diagnostic message.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::as_outcome_or;
/// use outcome_rail::Outcome;
///
/// let missing: Option<i32> = None;
/// assert_eq!(as_outcome_or(missing, || "missing"), Outcome::Failure("missing"));
/// ```
#[inline]
pub fn as_outcome_or<T, E, F>(value: Option<T>, failure_supplier: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    match value {
        Some(value) => Outcome::Success(value),
        None => Outcome::Failure(failure_supplier()),
    }
}

/// Converts a `Result` into an `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let parsed = result_to_outcome("42".parse::<i32>());
/// assert_eq!(parsed, Outcome::Success(42));
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Success(value),
        Err(reason) => Outcome::Failure(reason),
    }
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// fn double(o: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
///     let n = outcome_to_result(o)?;
///     Ok(n * 2)
/// }
///
/// assert_eq!(double(Outcome::Success(21)), Ok(42));
/// assert_eq!(double(Outcome::Failure("bad")), Err("bad"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(reason) => Err(reason),
    }
}

impl<T, E> Outcome<T, E> {
    /// Wraps a `Result`, turning `Ok` into `Success` and `Err` into `Failure`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }

    /// Converts into a `Result`, typically to use the `?` operator.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        outcome_to_result(self)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome_to_result(outcome)
    }
}
