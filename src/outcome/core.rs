use core::convert::Infallible;
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a computation that can succeed with a value or fail with a reason.
///
/// `Outcome<T, E>` is a closed two-variant type: it is always exactly one of
/// `Success(T)` or `Failure(E)`. Every combinator consumes the outcome and
/// builds a new one, so an outcome is never mutated in place.
///
/// A success never carries failure-type information and vice versa, so a bare
/// `Outcome::Success(1)` is usable wherever any `Outcome<i32, E>` is expected.
/// When one side is statically uninhabited (`Infallible`), see
/// [`widen_failure`](Outcome::widen_failure) and [`widen_success`](Outcome::widen_success).
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes as an externally tagged enum:
/// `{"Success": value}` or `{"Failure": reason}`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure reason type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let ok: Outcome<i32, &str> = Outcome::Success(42);
/// assert!(ok.is_success());
///
/// let bad: Outcome<i32, &str> = Outcome::Failure("bad");
/// assert_eq!(bad.into_failure(), Some("bad"));
/// ```
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(42);
    /// assert_eq!(o.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<(), &str>::failure("missing field");
    /// assert!(o.is_failure());
    /// ```
    #[inline]
    pub fn failure(reason: E) -> Self {
        Self::Failure(reason)
    }

    /// Returns `true` if the outcome is a `Success`.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the outcome is a `Failure`.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Extracts the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Success(1).into_value(), Some(1));
    /// assert_eq!(Outcome::<i32, &str>::Failure("bad").into_value(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the failure reason, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::Failure("bad").into_failure(), Some("bad"));
    /// assert_eq!(Outcome::<i32, &str>::Success(1).into_failure(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the failure reason, if any.
    #[must_use]
    #[inline]
    pub fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    /// Converts `&Outcome<T, E>` into `Outcome<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Converts `&mut Outcome<T, E>` into `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }
}

impl<T> Outcome<T, Infallible> {
    /// Unwraps an outcome whose failure side cannot be inhabited.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::convert::Infallible;
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, Infallible> = Outcome::Success(7);
    /// assert_eq!(o.into_success(), 7);
    /// ```
    #[inline]
    pub fn into_success(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(never) => match never {},
        }
    }

    /// Re-labels the uninhabited failure side as any failure type `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::convert::Infallible;
    /// use outcome_rail::Outcome;
    ///
    /// let o: Outcome<i32, Infallible> = Outcome::Success(7);
    /// let widened: Outcome<i32, String> = o.widen_failure();
    /// assert_eq!(widened, Outcome::Success(7));
    /// ```
    #[inline]
    pub fn widen_failure<F>(self) -> Outcome<T, F> {
        Outcome::Success(self.into_success())
    }
}

impl<E> Outcome<Infallible, E> {
    /// Unwraps an outcome whose success side cannot be inhabited.
    #[inline]
    pub fn into_reason(self) -> E {
        match self {
            Self::Success(never) => match never {},
            Self::Failure(reason) => reason,
        }
    }

    /// Re-labels the uninhabited success side as any success type `U`.
    #[inline]
    pub fn widen_success<U>(self) -> Outcome<U, E> {
        Outcome::Failure(self.into_reason())
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({})", value),
            Self::Failure(reason) => write!(f, "Failure({})", reason),
        }
    }
}
