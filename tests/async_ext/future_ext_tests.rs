use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::FusedFuture;
use outcome_rail::prelude_async::*;

#[tokio::test]
async fn catch_fault_wraps_normal_output_in_success() {
    let outcome = AssertUnwindSafe(async { 21 * 2 }).catch_fault().await;

    assert_eq!(outcome.into_value(), Some(42));
}

#[tokio::test]
async fn catch_fault_captures_panic_as_failure() {
    let outcome = AssertUnwindSafe(async {
        tokio::task::yield_now().await;
        if true {
            panic!("poll failed");
        }
        1
    })
    .catch_fault()
    .await;

    assert_eq!(outcome.into_failure().map(|f| f.message().to_string()), Some("poll failed".to_string()));
}

#[tokio::test]
async fn catch_fault_composes_with_recover() {
    async fn fetch(id: u64) -> String {
        if id == 0 {
            panic!("id must be positive");
        }
        format!("user-{}", id)
    }

    let ok = AssertUnwindSafe(fetch(7)).catch_fault().await.recover(|_| "guest".to_string());
    let fallback = AssertUnwindSafe(fetch(0)).catch_fault().await.recover(|_| "guest".to_string());

    assert_eq!(ok, "user-7");
    assert_eq!(fallback, "guest");
}

#[tokio::test]
async fn catch_fault_future_is_terminated_after_completion() {
    let mut future = Box::pin(AssertUnwindSafe(async { 1 }).catch_fault());
    assert!(!future.is_terminated());

    let outcome = (&mut future).await;
    assert_eq!(outcome.into_value(), Some(1));
    assert!(future.is_terminated());
}

#[tokio::test]
async fn into_outcome_converts_ok_and_err() {
    let ok = async { "7".parse::<u8>() }.into_outcome().await;
    assert_eq!(ok.into_value(), Some(7));

    let bad = async { Err::<u8, &str>("unreachable host") }.into_outcome().await;
    assert_eq!(bad, Outcome::Failure("unreachable host"));
}

struct ReadyFused<T>(Option<T>);

impl<T: Unpin> Future for ReadyFused<T> {
    type Output = T;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<T> {
        match self.0.take() {
            Some(value) => Poll::Ready(value),
            None => Poll::Pending,
        }
    }
}

impl<T: Unpin> FusedFuture for ReadyFused<T> {
    fn is_terminated(&self) -> bool {
        self.0.is_none()
    }
}

#[tokio::test]
async fn into_outcome_future_forwards_termination() {
    let mut future = ReadyFused(Some(Ok::<i32, &str>(5))).into_outcome();
    assert!(!future.is_terminated());

    let outcome = (&mut future).await;
    assert_eq!(outcome, Outcome::Success(5));
    assert!(future.is_terminated());
}
