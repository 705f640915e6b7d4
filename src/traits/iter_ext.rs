use crate::collect;
use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;

/// Collection operations as methods on any iterator of [`Outcome`]s.
///
/// Each method consumes the iterator in order; see [`crate::collect`] for the
/// exact semantics.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OutcomeIterExt;
/// use outcome_rail::Outcome;
///
/// let parsed = ["1", "x", "3"]
///     .iter()
///     .map(|s| Outcome::from(s.parse::<i32>()));
/// let (values, reasons) = parsed.partition_outcomes();
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(reasons.len(), 1);
/// ```
pub trait OutcomeIterExt<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// Fail-fast collect; see [`collect::all_values`].
    #[inline]
    fn all_values(self) -> Outcome<Vec<T>, E> {
        collect::all_values(self)
    }

    /// Lenient collect dropping failures; see [`collect::any_values`].
    #[inline]
    fn any_values(self) -> Vec<T> {
        collect::any_values(self)
    }

    /// Splits into values and reasons; see [`collect::partition`].
    ///
    /// Named to stay clear of [`Iterator::partition`].
    #[inline]
    fn partition_outcomes(self) -> (Vec<T>, Vec<E>) {
        collect::partition(self)
    }
}

impl<I, T, E> OutcomeIterExt<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}
