#![cfg(all(feature = "compose", feature = "sequence"))]
//! Property-based tests for the typed composition laws.
//!
//! ## Join Laws
//! - **Definition**: `join_fns!(f, g)(x) == g(f(x))`
//! - **Single Stage**: `join_fns!(f)(x) == f(x)`
//! - **Associativity**: `join_fns!(f, join_fns!(g, h)) == join_fns!(join_fns!(f, g), h)`
//! - **Identity**: `join_fns!(identity, f) == f == join_fns!(f, identity)`
//!
//! ## Bind Laws
//! - **Definition**: `bind_args!(f, a, __)(b) == f(a, b)`
//!
//! ## Cycle Laws
//! - **Definition**: `cycle_args!(f, __, __, __)(a, b, c) == f(b, c, a)`
//! - **Data Last**: `bind_args!(cycle_args!(filter_seq, __, __), p, __)(s) == filter_seq(s, p)`

use hofkit::compose::identity;
use hofkit::sequence::{filter_seq, map_seq};
use hofkit::{bind_args, cycle_args, join_fns};
use proptest::prelude::*;

// =============================================================================
// Join Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_join_definition(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(join_fns!(function1, function2)(x), function2(function1(x)));
    }

    #[test]
    fn prop_join_single_stage(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(2);

        prop_assert_eq!(join_fns!(function)(x), function(x));
    }

    #[test]
    fn prop_join_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let left_nested = join_fns!(function1, join_fns!(function2, function3));
        let right_nested = join_fns!(join_fns!(function1, function2), function3);

        prop_assert_eq!(left_nested(x), right_nested(x));
    }

    #[test]
    fn prop_join_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(7);

        prop_assert_eq!(join_fns!(identity, function)(x), function(x));
    }

    #[test]
    fn prop_join_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(7);

        prop_assert_eq!(join_fns!(function, identity)(x), function(x));
    }
}

// =============================================================================
// Bind and Cycle Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_bind_definition(a in any::<i32>(), b in any::<i32>()) {
        let function = |first: i32, second: i32| first.wrapping_sub(second);

        prop_assert_eq!(bind_args!(function, a, __)(b), function(a, b));
    }

    #[test]
    fn prop_bind_all_arguments_is_thunk(a in any::<i32>(), b in any::<i32>()) {
        let function = |first: i32, second: i32| first.wrapping_mul(second);

        prop_assert_eq!(bind_args!(function, a, b)(), function(a, b));
    }

    #[test]
    fn prop_cycle_definition(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let function = |first: i32, second: i32, third: i32| (first, second, third);

        prop_assert_eq!(cycle_args!(function, __, __, __)(a, b, c), function(b, c, a));
    }

    #[test]
    fn prop_data_last_filter(sequence in prop::collection::vec(any::<i32>(), 0..40)) {
        let is_positive = |number: &i32| *number > 0;
        let keep_positive = bind_args!(cycle_args!(filter_seq, __, __), is_positive, __);

        prop_assert_eq!(keep_positive(sequence.clone()), filter_seq(sequence, is_positive));
    }

    #[test]
    fn prop_data_last_map(sequence in prop::collection::vec(any::<i32>(), 0..40)) {
        let halve = |number: i32| number / 2;
        let halve_all = bind_args!(cycle_args!(map_seq, __, __), halve, __);

        prop_assert_eq!(halve_all(sequence.clone()), map_seq(sequence, halve));
    }
}
