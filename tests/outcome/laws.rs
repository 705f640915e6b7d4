use outcome_rail::Outcome;

fn samples() -> Vec<Outcome<i32, String>> {
    vec![
        Outcome::Success(0),
        Outcome::Success(-7),
        Outcome::Success(42),
        Outcome::Failure(String::new()),
        Outcome::Failure("bad".to_string()),
    ]
}

#[test]
fn map_identity_law() {
    for o in samples() {
        assert_eq!(o.clone().map(|x| x), o);
    }
}

#[test]
fn map_composition_law() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 3;

    for o in samples() {
        assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
    }
}

#[test]
fn map_failure_identity_law() {
    for o in samples() {
        assert_eq!(o.clone().map_failure(|e| e), o);
    }
}

#[test]
fn map_failure_composition_law() {
    let f = |e: String| e.len();
    let g = |n: usize| n * 2;

    for o in samples() {
        assert_eq!(o.clone().map_failure(f).map_failure(g), o.map_failure(|e| g(f(e))));
    }
}

#[test]
fn flat_map_left_identity_law() {
    let f = |x: i32| {
        if x >= 0 {
            Outcome::Success(x * 2)
        } else {
            Outcome::Failure(format!("negative: {}", x))
        }
    };

    for x in [-3, 0, 5] {
        assert_eq!(Outcome::<i32, String>::Success(x).flat_map(f), f(x));
    }
}

#[test]
fn flat_map_right_identity_law() {
    for o in samples() {
        assert_eq!(o.clone().flat_map(Outcome::Success), o);
    }
}

#[test]
fn flat_map_failure_right_identity_law() {
    for o in samples() {
        assert_eq!(o.clone().flat_map_failure(Outcome::Failure), o);
    }
}

#[test]
fn success_channel_combinators_never_touch_failure_reason() {
    let bad: Outcome<i32, String> = Outcome::Failure("bad".to_string());

    let mapped: Outcome<String, String> = bad
        .clone()
        .map(|x| x.to_string())
        .flat_map(|s| Outcome::Success(s + "!"))
        .peek(|_| unreachable!());

    assert_eq!(mapped.into_failure(), bad.into_failure());
}

#[test]
fn failure_channel_combinators_never_touch_success_value() {
    let ok: Outcome<i32, String> = Outcome::Success(9);

    let mapped: Outcome<i32, usize> = ok
        .clone()
        .map_failure(|e| e.len())
        .flat_map_failure(|n| Outcome::Failure(n + 1))
        .peek_failure(|_| unreachable!());

    assert_eq!(mapped.into_value(), ok.into_value());
}
