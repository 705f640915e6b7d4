//! Aggregate operations over ordered sequences of [`Outcome`]s.
//!
//! - [`all_values`] - fail-fast collect: every value, or the first failure
//! - [`any_values`] - lenient collect: every value, failures dropped
//! - [`partition`] - split values and reasons into two ordered lists
//!
//! The same operations are available as methods on iterators through
//! [`OutcomeIterExt`](crate::traits::OutcomeIterExt), and `all_values`
//! semantics back the [`FromIterator`] implementation of `Outcome`.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::collect::{all_values, any_values, partition};
//! use outcome_rail::Outcome;
//!
//! let outcomes = vec![Outcome::Success(1), Outcome::Failure("bad"), Outcome::Success(3)];
//!
//! assert_eq!(all_values(outcomes.clone()), Outcome::Failure("bad"));
//! assert_eq!(any_values(outcomes.clone()), vec![1, 3]);
//! assert_eq!(partition(outcomes), (vec![1, 3], vec!["bad"]));
//! ```

use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;

/// Collects every success value, stopping at the first failure.
///
/// Elements after the first failure are never pulled from the iterator, so a
/// lazily produced sequence is not evaluated past that point.
///
/// # Examples
///
/// ```
/// use outcome_rail::collect::all_values;
/// use outcome_rail::Outcome;
///
/// let all_ok = vec![Outcome::<i32, &str>::Success(1), Outcome::Success(2), Outcome::Success(3)];
/// assert_eq!(all_values(all_ok), Outcome::Success(vec![1, 2, 3]));
///
/// let one_bad = vec![Outcome::Success(1), Outcome::Failure("bad"), Outcome::Success(3)];
/// assert_eq!(all_values(one_bad), Outcome::Failure("bad"));
/// ```
#[inline]
pub fn all_values<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Collects the success values in order, silently dropping every failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::collect::any_values;
/// use outcome_rail::Outcome;
///
/// let only_bad = vec![Outcome::<i32, &str>::Failure("bad")];
/// assert!(any_values(only_bad).is_empty());
/// ```
#[inline]
pub fn any_values<T, E, I>(outcomes: I) -> Vec<T>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().filter_map(Outcome::into_value).collect()
}

/// Splits outcomes into success values and failure reasons in a single pass.
///
/// Both lists keep the relative order of the input, and their lengths sum to
/// the number of input elements.
///
/// # Examples
///
/// ```
/// use outcome_rail::collect::partition;
/// use outcome_rail::Outcome;
///
/// let outcomes = vec![
///     Outcome::Success(1),
///     Outcome::Failure("bad"),
///     Outcome::Success(3),
///     Outcome::Failure("also bad"),
/// ];
/// assert_eq!(partition(outcomes), (vec![1, 3], vec!["bad", "also bad"]));
/// ```
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iter = outcomes.into_iter();
    let (lower, _) = iter.size_hint();
    let mut values = Vec::with_capacity(lower);
    let mut reasons = Vec::new();

    for outcome in iter {
        match outcome {
            Outcome::Success(value) => values.push(value),
            Outcome::Failure(reason) => reasons.push(reason),
        }
    }

    (values, reasons)
}

/// Yields success values until the first failure, which is parked in `failure`.
struct UntilFailure<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<I, T, E> Iterator for UntilFailure<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.failure.is_some() {
            return None;
        }
        match self.iter.next()? {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(reason) => {
                *self.failure = Some(reason);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

/// Collects an iterator of outcomes into an outcome of a collection.
///
/// Stops at the first `Failure` and returns it; otherwise every value is
/// gathered into `V` in iteration order.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let collected: Outcome<Vec<i32>, &str> =
///     vec![Outcome::Success(1), Outcome::Success(2)].into_iter().collect();
/// assert_eq!(collected, Outcome::Success(vec![1, 2]));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(iter: I) -> Self {
        let mut failure = None;
        let values: V = UntilFailure { iter: iter.into_iter(), failure: &mut failure }.collect();

        match failure {
            Some(reason) => Outcome::Failure(reason),
            None => Outcome::Success(values),
        }
    }
}
