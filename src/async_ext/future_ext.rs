//! Extension traits for futures.
//!
//! Provides `.catch_fault()` and `.into_outcome()`, mirroring the sync
//! [`outcome_from`](crate::fault::outcome_from) and
//! [`ResultExt::into_outcome`](crate::traits::ResultExt::into_outcome).

use core::future::Future;
use std::panic::UnwindSafe;

use super::catch_fault_future::{CatchFaultFuture, IntoOutcomeFuture};

/// Extension trait capturing panics raised by a future as [`Fault`](crate::fault::Fault)s.
///
/// The future must be [`UnwindSafe`]; wrap it in
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe) when the caller knows
/// the captured state stays consistent after a panic.
///
/// # Examples
///
/// ```rust,no_run
/// use outcome_rail::async_ext::OutcomeFutureExt;
/// use std::panic::AssertUnwindSafe;
///
/// async fn fetch(id: u64) -> String {
///     if id == 0 {
///         panic!("id must be positive");
///     }
///     format!("user-{}", id)
/// }
///
/// async fn fetch_or_guest(id: u64) -> String {
///     AssertUnwindSafe(fetch(id))
///         .catch_fault()
///         .await
///         .recover(|_fault| "guest".to_string())
/// }
/// ```
pub trait OutcomeFutureExt: Future + Sized {
    /// Resolves to `Success(output)`, or to `Failure(Fault)` if polling panics.
    #[inline]
    fn catch_fault(self) -> CatchFaultFuture<Self>
    where
        Self: UnwindSafe,
    {
        CatchFaultFuture::new(self)
    }
}

impl<Fut> OutcomeFutureExt for Fut where Fut: Future {}

/// Extension trait converting futures of `Result` into futures of [`Outcome`](crate::Outcome).
///
/// # Examples
///
/// ```rust
/// use outcome_rail::async_ext::FutureResultExt;
///
/// async fn example() {
///     let outcome = async { "7".parse::<u8>() }.into_outcome().await;
///     assert_eq!(outcome.into_value(), Some(7));
/// }
/// ```
pub trait FutureResultExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Resolves to `Success` on `Ok` and `Failure` on `Err`.
    #[inline]
    fn into_outcome(self) -> IntoOutcomeFuture<Self> {
        IntoOutcomeFuture::new(self)
    }
}

impl<Fut, T, E> FutureResultExt<T, E> for Fut where Fut: Future<Output = Result<T, E>> {}
