//! Property-based tests for Semigroup and Monoid laws.
//!
//! This module verifies that the fold algebra satisfies the required laws:
//!
//! - **Associativity**: `(a.combine(b)).combine(c) == a.combine(b.combine(c))`
//! - **Left Identity**: `T::empty().combine(a) == a`
//! - **Right Identity**: `a.combine(T::empty()) == a`
//! - **Dual Reversal**: `Dual(a).combine(Dual(b)) == Dual(b.combine(a))`
//! - **Endo Composition**: `Endo(f).combine(Endo(g)).apply(x) == f(g(x))`

use monofold::typeclass::{Dual, Endo, Max, Min, Monoid, Product, Semigroup, Sum};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_string_associativity(a in any::<String>(), b in any::<String>(), c in any::<String>()) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_string_identity(a in any::<String>()) {
        prop_assert_eq!(String::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(String::empty()), a);
    }

    #[test]
    fn prop_vec_associativity(
        a in prop::collection::vec(any::<i32>(), 0..10),
        b in prop::collection::vec(any::<i32>(), 0..10),
        c in prop::collection::vec(any::<i32>(), 0..10)
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_sum_associativity_and_identity(
        a in -1_000_000i64..1_000_000,
        b in -1_000_000i64..1_000_000,
        c in -1_000_000i64..1_000_000
    ) {
        let left = Sum(a).combine(Sum(b)).combine(Sum(c));
        let right = Sum(a).combine(Sum(b).combine(Sum(c)));
        prop_assert_eq!(left, right);

        prop_assert_eq!(Sum::<i64>::empty().combine(Sum(a)), Sum(a));
        prop_assert_eq!(Sum(a).combine(Sum::empty()), Sum(a));
    }

    #[test]
    fn prop_product_identity(a in -1000i64..1000) {
        let value = Product(a);
        prop_assert_eq!(Product::<i64>::empty().combine(value), value);
        prop_assert_eq!(value.combine(Product::empty()), value);
    }

    #[test]
    fn prop_max_min_laws(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let left = Max(a).combine(Max(b)).combine(Max(c));
        let right = Max(a).combine(Max(b).combine(Max(c)));
        prop_assert_eq!(left, right);

        prop_assert_eq!(Max::<i32>::empty().combine(Max(a)), Max(a));
        prop_assert_eq!(Min::<i32>::empty().combine(Min(a)), Min(a));
    }

    #[test]
    fn prop_option_associativity(
        a in prop::option::of(any::<String>()),
        b in prop::option::of(any::<String>()),
        c in prop::option::of(any::<String>())
    ) {
        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_identity_is_none(a in prop::option::of(any::<String>())) {
        prop_assert_eq!(Option::<String>::empty().combine(a.clone()), a.clone());
        prop_assert_eq!(a.clone().combine(Option::empty()), a);
    }

    #[test]
    fn prop_dual_reverses_combine(a in any::<String>(), b in any::<String>()) {
        let direct = Dual(a.clone()).combine(Dual(b.clone()));
        let flipped = Dual(b.combine(a));
        prop_assert_eq!(direct, flipped);
    }

    #[test]
    fn prop_dual_identity(a in any::<String>()) {
        let value = Dual(a);
        prop_assert_eq!(Dual::<String>::empty().combine(value.clone()), value.clone());
        prop_assert_eq!(value.clone().combine(Dual::empty()), value);
    }

    #[test]
    fn prop_endo_composes_right_to_left(value in any::<i64>(), add in -100i64..100, mul in -4i64..4) {
        let adder = Endo::new(move |x: i64| x.wrapping_add(add));
        let scaler = Endo::new(move |x: i64| x.wrapping_mul(mul));

        let composed = adder.combine(scaler).apply(value);
        prop_assert_eq!(composed, value.wrapping_mul(mul).wrapping_add(add));
    }

    #[test]
    fn prop_endo_identity_laws(value in any::<i64>(), add in -100i64..100) {
        let left = Endo::<i64>::empty()
            .combine(Endo::new(move |x: i64| x.wrapping_add(add)))
            .apply(value);
        let right = Endo::new(move |x: i64| x.wrapping_add(add))
            .combine(Endo::empty())
            .apply(value);
        prop_assert_eq!(left, value.wrapping_add(add));
        prop_assert_eq!(right, value.wrapping_add(add));
    }

    #[test]
    fn prop_combine_all_equals_sequential_combines(
        values in prop::collection::vec(any::<String>(), 0..10)
    ) {
        let expected = values
            .iter()
            .fold(String::new(), |accumulator, element| accumulator.combine(element.clone()));
        prop_assert_eq!(String::combine_all(values), expected);
    }
}
