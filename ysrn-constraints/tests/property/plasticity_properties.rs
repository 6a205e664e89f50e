//! Property tests for the feedback law and the store built on it.

use proptest::prelude::*;

use ysrn_constraints::{adapt, ConstraintWeightStore};
use ysrn_core::traits::IConstraintStore;

proptest! {
    #[test]
    fn positive_feedback_never_decreases(
        start in 0.0f64..=1.0,
        rate in 0.0f64..=1.0,
        signals in prop::collection::vec(0.0f64..=1.0, 1..40),
    ) {
        let mut w = start;
        for s in signals {
            let next = adapt(w, s, rate);
            prop_assert!(next >= w);
            prop_assert!(next <= 1.0);
            w = next;
        }
    }

    #[test]
    fn negative_feedback_never_increases(
        start in 0.0f64..=1.0,
        rate in 0.0f64..=1.0,
        signals in prop::collection::vec(-1.0f64..=0.0, 1..40),
    ) {
        let mut w = start;
        for s in signals {
            let next = adapt(w, s, rate);
            prop_assert!(next <= w);
            prop_assert!(next >= 0.0);
            w = next;
        }
    }

    #[test]
    fn store_weights_stay_in_unit_interval(
        signals in prop::collection::vec(-1.0f64..=1.0, 1..60),
    ) {
        let store = ConstraintWeightStore::new();
        for s in signals {
            let w = store.apply_feedback("c", s).unwrap();
            prop_assert!((0.0..=1.0).contains(&w));
        }
        let count = store.constraint("c").unwrap().unwrap().update_count;
        prop_assert!(count >= 1);
    }

    #[test]
    fn out_of_range_signals_are_always_rejected(signal in prop_oneof![1.0001f64..100.0, -100.0f64..-1.0001]) {
        let store = ConstraintWeightStore::new();
        prop_assert!(store.apply_feedback("c", signal).is_err());
        prop_assert!(store.is_empty().unwrap());
    }
}
