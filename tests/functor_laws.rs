#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`

use proptest::prelude::*;
use trivalent::typeclass::Functor;
use trivalent::value::{Error, Maybe, Outcome};

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from_option)
}

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::value),
        Just(Outcome::none()),
        "[a-z ]{1,16}".prop_map(|message| Outcome::error(Error::new(message))),
    ]
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Outcome<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_outcome_identity_law(value in outcome_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_outcome_composition_law(value in outcome_strategy()) {
        let function1 = |n: i32| i64::from(n) * 3;
        let function2 = |n: i64| n.to_string();

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_outcome_fmap_preserves_state(value in outcome_strategy()) {
        let mapped = value.clone().fmap(|n| n.wrapping_sub(1));
        prop_assert_eq!(mapped.is_some(), value.is_some());
        prop_assert_eq!(mapped.is_none(), value.is_none());
        prop_assert_eq!(mapped.error_ref(), value.error_ref());
    }
}
