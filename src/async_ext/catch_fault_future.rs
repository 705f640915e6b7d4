//! Future wrappers producing [`Outcome`]s.
//!
//! - [`CatchFaultFuture`] captures an unwinding panic raised while polling
//!   the inner future as `Failure(Fault)`.
//! - [`IntoOutcomeFuture`] converts a `Result` output into an `Outcome`.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{self, AssertUnwindSafe, UnwindSafe};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::fault::Fault;
use crate::outcome::Outcome;

pin_project! {
    /// A Future wrapper that turns a panic during polling into `Failure(Fault)`.
    ///
    /// Once the inner future has completed or panicked it is never polled
    /// again; polling the wrapper after that returns `Poll::Pending`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outcome_rail::async_ext::OutcomeFutureExt;
    /// use std::panic::AssertUnwindSafe;
    ///
    /// async fn example() {
    ///     let outcome = AssertUnwindSafe(async { 21 * 2 }).catch_fault().await;
    ///     assert_eq!(outcome.into_value(), Some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFaultFuture<Fut> {
        #[pin]
        future: Fut,
        terminated: bool,
    }
}

impl<Fut> CatchFaultFuture<Fut> {
    /// Wraps `future`, capturing panics raised while it is polled.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future, terminated: false }
    }
}

impl<Fut> Future for CatchFaultFuture<Fut>
where
    Fut: Future + UnwindSafe,
{
    type Output = Outcome<Fut::Output, Fault>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        if *this.terminated {
            return Poll::Pending;
        }

        let future = this.future;
        match panic::catch_unwind(AssertUnwindSafe(|| future.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(value)) => {
                *this.terminated = true;
                Poll::Ready(Outcome::Success(value))
            }
            Err(payload) => {
                *this.terminated = true;
                Poll::Ready(Outcome::Failure(Fault::from_payload(payload)))
            }
        }
    }
}

impl<Fut> FusedFuture for CatchFaultFuture<Fut>
where
    Fut: Future + UnwindSafe,
{
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

pin_project! {
    /// A Future wrapper converting a `Result` output into an [`Outcome`].
    #[must_use = "futures do nothing unless polled"]
    pub struct IntoOutcomeFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> IntoOutcomeFuture<Fut> {
    /// Wraps `future`, converting its output when it resolves.
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T, E> Future for IntoOutcomeFuture<Fut>
where
    Fut: Future<Output = Result<T, E>>,
{
    type Output = Outcome<T, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::from_result)
    }
}

impl<Fut, T, E> FusedFuture for IntoOutcomeFuture<Fut>
where
    Fut: FusedFuture<Output = Result<T, E>>,
{
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}
