//! Extension trait for converting `Result` values into [`Outcome`]s.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::Outcome;
//!
//! let port = "8080".parse::<u16>().into_outcome();
//! assert_eq!(port, Outcome::Success(8080));
//! ```

use crate::convert::result_to_outcome;
use crate::outcome::Outcome;

/// Extension trait adding `.into_outcome()` to `Result`.
///
/// Equivalent to `Outcome::from(result)`, but reads left to right at the end
/// of a method chain.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
///
/// let doubled = "21"
///     .parse::<i32>()
///     .into_outcome()
///     .map(|n| n * 2)
///     .recover(|_| 0);
/// assert_eq!(doubled, 42);
/// ```
pub trait ResultExt<T, E> {
    /// Converts `Ok` into `Success` and `Err` into `Failure`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        result_to_outcome(self)
    }
}
