use crate::convert::as_outcome_or;
use crate::outcome::Outcome;

/// Extension trait turning an `Option` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OptionExt;
/// use outcome_rail::Outcome;
///
/// let users = ["ada", "grace"];
/// let found = users.iter().position(|u| *u == "linus").as_outcome_or(|| "no such user");
/// assert_eq!(found, Outcome::Failure("no such user"));
/// ```
pub trait OptionExt<T> {
    /// Returns `Success(value)` if present, otherwise `Failure(failure_supplier())`.
    ///
    /// The supplier runs only when the value is absent.
    fn as_outcome_or<E, F>(self, failure_supplier: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn as_outcome_or<E, F>(self, failure_supplier: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        as_outcome_or(self, failure_supplier)
    }
}
