use std::cmp::Ordering;

use ::proptest::prelude::*;

use crate::{Error, Natural};

// unary values cost O(n) per step, keep magnitudes small
fn arb_natural(max: u64) -> BoxedStrategy<Natural> {
    (0..max).prop_map(Natural::from).boxed()
}

prop_compose! {
    fn arb_positive(max: u64)(n in 1..max) -> Natural {
        Natural::from(n)
    }
}

proptest! {
    #[test]
    fn zero_is_additive_identity(a in arb_natural(64)) {
        prop_assert_eq!(a.clone() + Natural::Zero, a.clone());
        prop_assert_eq!(Natural::Zero + a.clone(), a);
    }

    #[test]
    fn increment_is_adding_one(a in arb_natural(64)) {
        prop_assert_eq!(a.clone().increment(), a + Natural::successor(Natural::Zero));
    }

    #[test]
    fn decrement_undoes_increment(a in arb_natural(64)) {
        prop_assert_eq!(a.clone().increment().decrement(), a);
    }

    #[test]
    fn addition_commutes(a in arb_natural(64), b in arb_natural(64)) {
        prop_assert_eq!(a.clone() + b.clone(), b + a);
    }

    #[test]
    fn addition_associates(a in arb_natural(32), b in arb_natural(32), c in arb_natural(32)) {
        prop_assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a + (b + c)
        );
    }

    #[test]
    fn addition_matches_u64(x in 0..64u64, y in 0..64u64) {
        prop_assert_eq!((Natural::from(x) + Natural::from(y)).to_u64(), x + y);
    }

    #[test]
    fn subtraction_truncates(a in arb_natural(64), b in arb_natural(64)) {
        if a < b {
            prop_assert_eq!(a.subtract(&b), Natural::Zero);
        } else {
            prop_assert_eq!(a.clone().subtract(&b) + b, a);
        }
    }

    #[test]
    fn subtraction_matches_saturating_u64(x in 0..64u64, y in 0..64u64) {
        prop_assert_eq!(
            (Natural::from(x) - Natural::from(y)).to_u64(),
            x.saturating_sub(y)
        );
    }

    #[test]
    fn multiplication_by_zero(a in arb_natural(64)) {
        prop_assert_eq!(a.clone().multiply(&Natural::Zero), Natural::Zero);
        prop_assert_eq!(Natural::Zero.multiply(&a), Natural::Zero);
    }

    #[test]
    fn multiplication_matches_u64(x in 0..24u64, y in 0..24u64) {
        prop_assert_eq!((Natural::from(x) * Natural::from(y)).to_u64(), x * y);
    }

    #[test]
    fn multiplication_commutes(a in arb_natural(24), b in arb_natural(24)) {
        prop_assert_eq!(&a * &b, &b * &a);
    }

    #[test]
    fn ordering_is_total_and_agrees_with_equality(a in arb_natural(64), b in arb_natural(64)) {
        let ord = a.compare(&b);
        prop_assert_eq!(ord == Ordering::Equal, a == b);
        prop_assert_eq!(b.compare(&a), ord.reverse());
        prop_assert_eq!(ord, a.to_u64().cmp(&b.to_u64()));
    }

    #[test]
    fn division_by_zero_always_fails(a in arb_natural(64)) {
        prop_assert_eq!(
            a.clone().divide(&Natural::Zero),
            Err(Error::division_by_zero(a))
        );
    }

    #[test]
    fn division_floors(a in arb_natural(64), b in arb_positive(16)) {
        let q = a.clone().divide(&b).unwrap();
        prop_assert!(&q * &b <= a);
        prop_assert!(q.increment().multiply(&b) > a);
    }

    #[test]
    fn division_matches_u64(x in 0..64u64, y in 1..16u64) {
        prop_assert_eq!(
            Natural::from(x).divide(&Natural::from(y)).map(|q| q.to_u64()),
            Ok(x / y)
        );
    }

    #[test]
    fn eq_dyn_rejects_foreign_values(x in 0..64u64) {
        let a = Natural::from(x);
        prop_assert!(a.eq_dyn(&Natural::from(x)));
        prop_assert!(!a.eq_dyn(&x));
    }
}
