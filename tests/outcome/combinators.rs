use std::cell::Cell;
use std::ops::ControlFlow;
use std::panic::{self, AssertUnwindSafe};

use outcome_rail::Outcome;

#[test]
fn map_on_failure_does_not_invoke_function() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::Failure("bad");

    let mapped = o.map(|x| {
        calls.set(calls.get() + 1);
        x * 2
    });

    assert_eq!(mapped, Outcome::Failure("bad"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn flat_map_short_circuits_on_failure() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::Failure("bad");

    let chained: Outcome<String, &str> = o.flat_map(|x| {
        calls.set(calls.get() + 1);
        Outcome::Success(x.to_string())
    });

    assert_eq!(chained, Outcome::Failure("bad"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn flat_map_returns_inner_outcome_without_rewrapping() {
    let o: Outcome<i32, &str> = Outcome::Success(3);

    assert_eq!(o.flat_map(|_| Outcome::<i32, &str>::Failure("odd")), Outcome::Failure("odd"));
    assert_eq!(o.flat_map(|x| Outcome::<i32, &str>::Success(x + 1)), Outcome::Success(4));
}

#[test]
fn map_failure_leaves_success_untouched() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::Success(7);

    let mapped: Outcome<i32, usize> = o.map_failure(|reason| {
        calls.set(calls.get() + 1);
        reason.len()
    });

    assert_eq!(mapped, Outcome::Success(7));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_failure_transforms_reason() {
    let o: Outcome<i32, u16> = Outcome::Failure(404);
    assert_eq!(o.map_failure(|code| format!("HTTP {}", code)), Outcome::Failure("HTTP 404".to_string()));
}

#[test]
fn flat_map_failure_can_retry_into_success() {
    let attempts = Cell::new(0);
    let first: Outcome<&str, &str> = Outcome::Failure("connection reset");

    let retried: Outcome<&str, String> = first.flat_map_failure(|_| {
        attempts.set(attempts.get() + 1);
        Outcome::Success("connected")
    });

    assert_eq!(retried, Outcome::Success("connected"));
    assert_eq!(attempts.get(), 1);
}

#[test]
fn flat_map_failure_short_circuits_on_success() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::Success(1);

    let result: Outcome<i32, String> = o.flat_map_failure(|reason| {
        calls.set(calls.get() + 1);
        Outcome::Failure(reason.to_uppercase())
    });

    assert_eq!(result, Outcome::Success(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn get_returns_whichever_payload_is_present() {
    assert_eq!(Outcome::<i32, i32>::Success(1).get(), 1);
    assert_eq!(Outcome::<i32, i32>::Failure(2).get(), 2);
}

#[test]
fn get_into_widens_both_sides_to_a_common_type() {
    let ok: Outcome<u8, u16> = Outcome::Success(200);
    let bad: Outcome<u8, u16> = Outcome::Failure(60_000);

    assert_eq!(ok.get_into::<u32>(), 200);
    assert_eq!(bad.get_into::<u32>(), 60_000);
}

#[test]
fn recover_unwraps_or_maps_reason_to_value() {
    assert_eq!(Outcome::<usize, &str>::Failure("bad").recover(|r| r.len()), 3);
    assert_eq!(Outcome::<usize, &str>::Success(5).recover(|r| r.len()), 5);
}

#[test]
fn on_failure_returns_value_on_success() {
    let o: Outcome<i32, &str> = Outcome::Success(3);
    assert_eq!(o.on_failure(|reason| panic!("unexpected: {}", reason)), 3);
}

#[test]
fn on_failure_block_must_diverge() {
    let o: Outcome<i32, &str> = Outcome::Failure("bad");

    let caught = panic::catch_unwind(AssertUnwindSafe(|| {
        o.on_failure(|reason| panic!("aborted: {}", reason))
    }));

    let payload = caught.unwrap_err();
    assert_eq!(payload.downcast_ref::<String>().map(String::as_str), Some("aborted: bad"));
}

#[test]
fn peek_runs_only_for_success_and_returns_outcome_unchanged() {
    let seen = Cell::new(None);

    let ok = Outcome::<i32, &str>::Success(1).peek(|v| seen.set(Some(*v)));
    assert_eq!(ok, Outcome::Success(1));
    assert_eq!(seen.get(), Some(1));

    seen.set(None);
    let bad = Outcome::<i32, &str>::Failure("bad").peek(|v| seen.set(Some(*v)));
    assert_eq!(bad, Outcome::Failure("bad"));
    assert_eq!(seen.get(), None);
}

#[test]
fn peek_failure_runs_only_for_failure_and_returns_outcome_unchanged() {
    let seen = Cell::new(None);

    let bad = Outcome::<i32, &str>::Failure("bad").peek_failure(|r| seen.set(Some(*r)));
    assert_eq!(bad, Outcome::Failure("bad"));
    assert_eq!(seen.get(), Some("bad"));

    seen.set(None);
    let ok = Outcome::<i32, &str>::Success(1).peek_failure(|r| seen.set(Some(*r)));
    assert_eq!(ok, Outcome::Success(1));
    assert_eq!(seen.get(), None);
}

#[test]
fn panic_inside_peek_propagates_to_caller() {
    let caught = panic::catch_unwind(|| {
        Outcome::<i32, &str>::Success(1).peek(|_| panic!("tap failed"))
    });

    assert!(caught.is_err());
}

#[test]
fn into_control_flow_continues_with_value_and_breaks_with_reason() {
    assert_eq!(Outcome::<i32, &str>::Success(1).into_control_flow(), ControlFlow::Continue(1));
    assert_eq!(Outcome::<i32, &str>::Failure("bad").into_control_flow(), ControlFlow::Break("bad"));
}
