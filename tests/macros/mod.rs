use outcome_rail::{on_failure, Outcome};

fn first_even(values: &[Outcome<i32, &'static str>]) -> Result<i32, String> {
    for o in values {
        let n = on_failure!(*o, reason => return Err(format!("aborted: {}", reason)));
        if n % 2 == 0 {
            return Ok(n);
        }
    }
    Err("no even value".to_string())
}

#[test]
fn on_failure_macro_returns_early_from_enclosing_function() {
    assert_eq!(first_even(&[Outcome::Success(1), Outcome::Success(4)]), Ok(4));
    assert_eq!(
        first_even(&[Outcome::Success(1), Outcome::Failure("bad"), Outcome::Success(4)]),
        Err("aborted: bad".to_string())
    );
    assert_eq!(first_even(&[Outcome::Success(3)]), Err("no even value".to_string()));
}

#[test]
fn on_failure_macro_supports_loop_control() {
    let outcomes = [Outcome::Success(1), Outcome::Failure("skip"), Outcome::Success(3)];

    let mut kept = Vec::new();
    for o in outcomes {
        kept.push(on_failure!(o, _ => continue));
    }
    assert_eq!(kept, vec![1, 3]);

    let mut before_break = Vec::new();
    for o in outcomes {
        before_break.push(on_failure!(o, _ => break));
    }
    assert_eq!(before_break, vec![1]);
}

#[test]
fn on_failure_macro_unwraps_success_without_running_block() {
    let o: Outcome<String, &str> = Outcome::Success("ready".to_string());
    let value = on_failure!(o, reason => panic!("unexpected failure: {}", reason));

    assert_eq!(value, "ready");
}
