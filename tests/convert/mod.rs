use std::cell::Cell;

use outcome_rail::convert::{as_outcome_or, outcome_to_result, result_to_outcome};
use outcome_rail::Outcome;

#[test]
fn as_outcome_or_invokes_supplier_exactly_once_when_absent() {
    let calls = Cell::new(0);
    let o: Outcome<i32, String> = as_outcome_or(None, || {
        calls.set(calls.get() + 1);
        "missing".to_string()
    });

    assert_eq!(o, Outcome::Failure("missing".to_string()));
    assert_eq!(calls.get(), 1);
}

#[test]
fn as_outcome_or_never_invokes_supplier_when_present() {
    let calls = Cell::new(0);
    let o: Outcome<i32, String> = as_outcome_or(Some(3), || {
        calls.set(calls.get() + 1);
        "missing".to_string()
    });

    assert_eq!(o, Outcome::Success(3));
    assert_eq!(calls.get(), 0);
}

#[test]
fn nullable_projections_round_trip_through_option() {
    let present = Some(5);
    assert_eq!(as_outcome_or(present, || "none").into_value(), present);

    let absent: Option<i32> = None;
    assert_eq!(as_outcome_or(absent, || "none").into_failure(), Some("none"));
}

#[test]
fn result_conversions_preserve_variant_and_payload() {
    assert_eq!(result_to_outcome(Ok::<i32, &str>(1)), Outcome::Success(1));
    assert_eq!(result_to_outcome(Err::<i32, &str>("bad")), Outcome::Failure("bad"));

    assert_eq!(outcome_to_result(Outcome::<i32, &str>::Success(1)), Ok(1));
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::Failure("bad")), Err("bad"));
}

#[test]
fn from_impls_convert_both_ways() {
    let o: Outcome<u8, std::num::ParseIntError> = "12".parse::<u8>().into();
    assert_eq!(o.value(), Some(&12));

    let r: Result<u8, &str> = Outcome::Failure("bad").into();
    assert_eq!(r, Err("bad"));
}

#[test]
fn into_result_enables_question_mark_propagation() {
    fn sum(a: Outcome<i32, &'static str>, b: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
        Ok(a.into_result()? + b.into_result()?)
    }

    assert_eq!(sum(Outcome::Success(1), Outcome::Success(2)), Ok(3));
    assert_eq!(sum(Outcome::Success(1), Outcome::Failure("bad")), Err("bad"));
    assert_eq!(Outcome::from_result(sum(Outcome::Failure("first"), Outcome::Failure("second"))), Outcome::Failure("first"));
}
