//! Property-based tests for the combinator laws
//!
//! Each property is checked over arbitrary present and empty containers.

use crate::optional::Optional;
use proptest::prelude::*;
use std::cell::Cell;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::option;

    /// Generate optional values, present or empty
    pub fn optional<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Optional<T>> {
        option::of(element).prop_map(Optional::from)
    }

    /// Generate nullable inputs for the constructors
    pub fn nullable<T: 'static + std::fmt::Debug>(
        element: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Option<T>> {
        option::of(element)
    }
}

/// Counts how many times a callback ran
#[derive(Default)]
struct CallCounter(Cell<usize>);

impl CallCounter {
    fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    fn count(&self) -> usize {
        self.0.get()
    }
}

mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::proptest;

    proptest! {
        /// The strict constructor accepts exactly the non-absent inputs
        #[test]
        fn of_matches_presence(input in nullable(any::<i64>())) {
            let result = Optional::of(input);
            match input {
                Some(v) => {
                    let opt = result.unwrap();
                    prop_assert!(opt.is_present());
                    prop_assert_eq!(opt.get().unwrap(), v);
                }
                None => prop_assert!(result.unwrap_err().is_illegal_argument()),
            }
        }

        /// The absence-safe constructor never fails and mirrors the input
        #[test]
        fn of_nullable_mirrors_input(input in nullable(any::<i64>())) {
            let opt = Optional::of_nullable(input);
            prop_assert_eq!(opt.is_present(), input.is_some());
            prop_assert_eq!(opt.or_null(), input);
        }

        /// isEmpty is always the negation of isPresent
        #[test]
        fn is_empty_negates_is_present(opt in optional(any::<i32>())) {
            prop_assert_eq!(opt.is_empty(), !opt.is_present());
        }

        /// Read-only accessors are stable across repeated calls
        #[test]
        fn reads_are_idempotent(opt in optional(".*")) {
            let first = (opt.is_present(), opt.as_ref().or_null().cloned());
            let second = (opt.is_present(), opt.as_ref().or_null().cloned());
            prop_assert_eq!(first, second);
        }

        /// Callbacks run once when present and never when empty
        #[test]
        fn callbacks_short_circuit_on_empty(opt in optional(any::<u8>())) {
            let expected = usize::from(opt.is_present());

            let consumer = CallCounter::default();
            opt.if_present(|_| consumer.hit());
            prop_assert_eq!(consumer.count(), expected);

            let predicate = CallCounter::default();
            let _ = opt.filter(|_| { predicate.hit(); true });
            prop_assert_eq!(predicate.count(), expected);

            let mapper = CallCounter::default();
            let _ = opt.map(|v| { mapper.hit(); v });
            prop_assert_eq!(mapper.count(), expected);

            let binder = CallCounter::default();
            let _ = opt.flat_map(|v| { binder.hit(); Optional::present(v) });
            prop_assert_eq!(binder.count(), expected);

            let supplier = CallCounter::default();
            let _ = opt.or_else_get(|| { supplier.hit(); 0 });
            prop_assert_eq!(supplier.count(), 1 - expected);

            let fallback = CallCounter::default();
            let _ = opt.or(|| { fallback.hit(); Optional::empty() });
            prop_assert_eq!(fallback.count(), 1 - expected);
        }

        /// Exactly one branch of ifPresentOrElse runs
        #[test]
        fn if_present_or_else_runs_one_branch(opt in optional(any::<u8>())) {
            let present = CallCounter::default();
            let empty = CallCounter::default();
            opt.if_present_or_else(|_| present.hit(), || empty.hit());
            prop_assert_eq!(present.count() + empty.count(), 1);
            prop_assert_eq!(present.count() == 1, opt.is_present());
        }

        /// Filtering keeps the value exactly when the predicate holds
        #[test]
        fn filter_agrees_with_predicate(opt in optional(any::<i32>()), bound in any::<i32>()) {
            let filtered = opt.filter(|v| *v > bound);
            let expected = opt.or_null().filter(|v| *v > bound);
            prop_assert_eq!(filtered.or_null(), expected);
        }

        /// Left identity: binding a present value applies the function directly
        #[test]
        fn flat_map_left_identity(v in any::<i32>()) {
            let f = |x: i32| Optional::of_nullable(x.checked_add(1));
            prop_assert_eq!(Optional::present(v).flat_map(f), f(v));
        }

        /// Right identity: binding with the constructor changes nothing
        #[test]
        fn flat_map_right_identity(opt in optional(any::<i32>())) {
            prop_assert_eq!(opt.flat_map(Optional::present), opt);
        }

        /// Associativity of bind
        #[test]
        fn flat_map_associativity(opt in optional(any::<i32>())) {
            let f = |x: i32| Optional::of_nullable(x.checked_mul(2));
            let g = |x: i32| if x % 3 == 0 { Optional::empty() } else { Optional::present(x) };
            prop_assert_eq!(opt.flat_map(f).flat_map(g), opt.flat_map(|x| f(x).flat_map(g)));
        }

        /// An absent mapper output always yields an empty container
        #[test]
        fn map_nullable_rederives_presence(opt in optional(any::<i32>())) {
            let mapped = opt.map_nullable(|v| v.checked_neg());
            let expected = opt.or_null().and_then(i32::checked_neg);
            prop_assert_eq!(mapped.or_null(), expected);
        }

        /// orElse returns the fallback exactly when empty
        #[test]
        fn or_else_picks_fallback_only_when_empty(opt in optional(any::<i32>()), fallback in any::<i32>()) {
            let expected = opt.or_null().unwrap_or(fallback);
            prop_assert_eq!(opt.or_else(fallback), expected);
        }
    }
}
