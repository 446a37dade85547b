//! Integration tests for `Outcome`.

use rstest::rstest;
use std::cell::Cell;
use trivalent::prelude::*;

fn failed(message: &str) -> Outcome<i32> {
    Outcome::error(Error::new(message))
}

// =============================================================================
// Construction and inspection
// =============================================================================

#[test]
fn of_str_maps_and_folds_to_upper_case() {
    let result = Outcome::of("test")
        .map(str::to_uppercase)
        .fold(|value| value, || "none".to_string(), |error| error.message().to_string());
    assert_eq!(result, "TEST");
}

#[rstest]
#[case(Outcome::value(1), true, false, false)]
#[case(Outcome::none(), false, true, false)]
#[case(failed("e"), false, false, true)]
fn exactly_one_state_holds(
    #[case] outcome: Outcome<i32>,
    #[case] some: bool,
    #[case] none: bool,
    #[case] error: bool,
) {
    assert_eq!(outcome.is_some(), some);
    assert_eq!(outcome.is_none(), none);
    assert_eq!(outcome.is_error(), error);
    assert_eq!(outcome.is_success(), !error);
}

#[test]
fn conversions_into_outcome() {
    let from_error: Outcome<u8> = Error::new("bad").into();
    let from_nothing: Outcome<u8> = Nothing.into();
    let from_maybe: Outcome<u8> = Maybe::some(3).into();
    let from_result: Outcome<u8> = Err::<u8, _>(Error::new("err")).into();

    assert!(from_error.is_error());
    assert!(from_nothing.is_none());
    assert_eq!(from_maybe, Outcome::value(3));
    assert_eq!(from_result.error_ref().map(Error::message), Some("err"));
}

#[test]
fn into_result_keeps_three_states() {
    assert_eq!(Outcome::value(1).into_result(), Ok(Some(1)));
    assert_eq!(Outcome::<i32>::none().into_result(), Ok(None));
    assert!(failed("x").into_result().is_err());
}

// =============================================================================
// Error absorption
// =============================================================================

#[rstest]
#[case(1)]
#[case(5)]
#[case(25)]
fn error_is_absorbed_by_any_number_of_steps(#[case] steps: usize) {
    let original = failed("root cause");
    let calls = Cell::new(0);
    let mut outcome = original.clone();
    for _ in 0..steps {
        outcome = outcome.then(|n| {
            calls.set(calls.get() + 1);
            Outcome::value(n + 1)
        });
    }
    assert_eq!(outcome, original);
    assert_eq!(calls.get(), 0);
}

#[test]
fn fold_on_error_invokes_only_on_error_once() {
    let some_calls = Cell::new(0);
    let none_calls = Cell::new(0);
    let error_calls = Cell::new(0);

    failed("boom").fold(
        |_| some_calls.set(some_calls.get() + 1),
        || none_calls.set(none_calls.get() + 1),
        |error| {
            assert_eq!(error.message(), "boom");
            error_calls.set(error_calls.get() + 1);
        },
    );

    assert_eq!((some_calls.get(), none_calls.get(), error_calls.get()), (0, 0, 1));
}

// =============================================================================
// combine
// =============================================================================

#[rstest]
#[case(Outcome::value(1))]
#[case(Outcome::none())]
fn success_combine_returns_next(#[case] first: Outcome<i32>) {
    assert_eq!(first.combine(Outcome::value("next")), Outcome::value("next"));
    assert_eq!(
        Outcome::<i32>::none().combine(failed("later")),
        failed("later")
    );
}

#[test]
fn error_combine_keeps_error() {
    let error = failed("first");
    assert_eq!(error.clone().combine(Outcome::value(2)), error);
}

// =============================================================================
// Fault capture
// =============================================================================

#[test]
fn panicking_map_becomes_error_with_cause() {
    let outcome: Outcome<i32> = Outcome::value(1).map(|_| panic!("mapping failed"));
    let error = outcome.error_ref().cloned().unwrap_or_else(|| Error::new(""));
    assert_eq!(error.message(), "mapping failed");
    assert!(error.is_panic());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn try_map_keeps_err_as_cause() {
    let outcome = Outcome::value("abc").try_map(str::parse::<i32>);
    let error = outcome.error_ref().cloned().unwrap_or_else(|| Error::new(""));
    assert_eq!(error.message(), "invalid digit found in string");
    assert!(error.cause().is_some_and(|cause| cause.is::<std::num::ParseIntError>()));
    assert!(!error.is_panic());
}

#[test]
fn map_error_rewrites_message() {
    let outcome = failed("low level").map_error(|error| error.with_message("while loading profile"));
    assert_eq!(outcome.error_ref().map(Error::message), Some("while loading profile"));
}

#[test]
fn fold_success_collapses_value_and_none() {
    let label = |outcome: Outcome<i32>| outcome.fold_success(|_| "ok", |_| "failed");
    assert_eq!(label(Outcome::value(1)), "ok");
    assert_eq!(label(Outcome::none()), "ok");
    assert_eq!(label(failed("x")), "failed");
}

#[test]
fn error_payload_survives_chain() {
    #[derive(Debug, PartialEq)]
    struct RequestId(u32);

    let outcome = Outcome::<i32>::error(Error::new("denied").with_data(RequestId(7)))
        .map(|n| n + 1)
        .then(|n| Outcome::value(n * 2));

    let payload = outcome.error_ref().and_then(|error| error.data::<RequestId>());
    assert_eq!(payload, Some(&RequestId(7)));
}

#[test]
fn taps_run_only_for_matching_state() {
    let log = std::cell::RefCell::new(Vec::new());
    let _ = failed("e")
        .on_some_value(|_| log.borrow_mut().push("some"))
        .on_none_value(|| log.borrow_mut().push("none"))
        .on_error(|_| log.borrow_mut().push("error"));
    assert_eq!(*log.borrow(), ["error"]);
}
