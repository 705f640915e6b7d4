use core::convert::Infallible;
use core::ops::ControlFlow;

use crate::outcome::core::Outcome;

impl<T, E> Outcome<T, E> {
    /// Maps the success value using the provided function.
    ///
    /// A `Failure` passes through with its reason untouched and `f` is never called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(21);
    /// assert_eq!(o.map(|x| x * 2), Outcome::Success(42));
    ///
    /// let o = Outcome::<i32, &str>::Failure("bad");
    /// assert_eq!(o.map(|x| x * 2), Outcome::Failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// The outcome returned by `f` is returned as is, without re-wrapping.
    /// `f` is only invoked on `Success`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Outcome::Success(input)
    ///     } else {
    ///         Outcome::Failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(4).flat_map(parse_even), Outcome::Success(4));
    /// assert_eq!(Outcome::Success(3).flat_map(parse_even), Outcome::Failure("not even"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Maps the failure reason, leaving a success value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, u16>::Failure(404);
    /// assert_eq!(o.map_failure(|code| format!("HTTP {}", code)), Outcome::Failure("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(reason) => Outcome::Failure(f(reason)),
        }
    }

    /// Chains a computation over the failure reason, which may turn the
    /// failure into a success (a retry) or into a different failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("missing");
    /// let retried: Outcome<i32, String> = o.flat_map_failure(|_| Outcome::Success(0));
    /// assert_eq!(retried, Outcome::Success(0));
    /// ```
    #[inline]
    pub fn flat_map_failure<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(reason) => f(reason),
        }
    }

    /// Returns the success value, or hands the failure reason to `block`,
    /// which must not return.
    ///
    /// The `Infallible` return type makes a block that returns normally a
    /// compile error: `block` has to panic, exit the process, or otherwise
    /// diverge. To bail out of the enclosing function with `return`, use the
    /// [`on_failure!`](crate::on_failure) macro instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Success(3);
    /// let value = o.on_failure(|reason| panic!("unexpected failure: {}", reason));
    /// assert_eq!(value, 3);
    /// ```
    #[inline]
    #[allow(unreachable_code)]
    pub fn on_failure<F>(self, block: F) -> T
    where
        F: FnOnce(E) -> Infallible,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(reason) => match block(reason) {},
        }
    }

    /// Unwraps the success value, or maps the failure reason to a value of the
    /// same type. Never exits early.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<usize, &str>::Failure("bad").recover(|r| r.len()), 3);
    /// assert_eq!(Outcome::<usize, &str>::Success(5).recover(|r| r.len()), 5);
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(reason) => f(reason),
        }
    }

    /// Calls `f` with the success value for a side effect and returns the
    /// outcome unchanged. A panic raised by `f` is not caught.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let mut seen = Vec::new();
    /// let o = Outcome::<i32, &str>::Success(1).peek(|v| seen.push(*v));
    /// assert_eq!(o, Outcome::Success(1));
    /// assert_eq!(seen, vec![1]);
    /// ```
    #[inline]
    pub fn peek<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with the failure reason for a side effect and returns the
    /// outcome unchanged.
    #[inline]
    pub fn peek_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Failure(reason) = &self {
            f(reason);
        }
        self
    }

    /// Converts into a [`ControlFlow`], continuing with the value or breaking
    /// with the reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::ops::ControlFlow;
    /// use outcome_rail::Outcome;
    ///
    /// let mut total = 0;
    /// let halted = 'sum: {
    ///     for o in [Outcome::Success(1), Outcome::Failure("bad"), Outcome::Success(3)] {
    ///         match o.into_control_flow() {
    ///             ControlFlow::Continue(v) => total += v,
    ///             ControlFlow::Break(reason) => break 'sum Some(reason),
    ///         }
    ///     }
    ///     None
    /// };
    /// assert_eq!(total, 1);
    /// assert_eq!(halted, Some("bad"));
    /// ```
    #[inline]
    pub fn into_control_flow(self) -> ControlFlow<E, T> {
        match self {
            Self::Success(value) => ControlFlow::Continue(value),
            Self::Failure(reason) => ControlFlow::Break(reason),
        }
    }

    /// Unwraps into a common type `S` that both payload types convert into.
    ///
    /// This is the widening counterpart of [`get`](Outcome::get), which
    /// requires both payload types to be identical.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<u8, u16>::Success(7);
    /// let n: u32 = o.get_into();
    /// assert_eq!(n, 7);
    /// ```
    #[inline]
    pub fn get_into<S>(self) -> S
    where
        T: Into<S>,
        E: Into<S>,
    {
        match self {
            Self::Success(value) => value.into(),
            Self::Failure(reason) => reason.into(),
        }
    }
}

impl<T> Outcome<T, T> {
    /// Returns whichever payload is present, when success and failure share a type.
    ///
    /// Usually reached after [`map_failure`](Outcome::map_failure) has reduced
    /// the failure channel to the success type.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::Failure("bad").map_failure(|r| r.len() as i32);
    /// assert_eq!(o.get(), 3);
    /// ```
    #[inline]
    pub fn get(self) -> T {
        match self {
            Self::Success(value) | Self::Failure(value) => value,
        }
    }
}
