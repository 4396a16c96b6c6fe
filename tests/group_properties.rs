//! Group-law and order properties for Q_{4n}
//!
//! Small groups are checked exhaustively; larger ones and the infinite group
//! Q_0 are sampled with proptest.

use std::collections::HashSet;

use proptest::prelude::*;
use quaternion_group::{
    check_axioms, exponent, order_by_search, Exponent, GroupParams, Order, QuaternionElement,
    QuaternionGroup,
};

fn element_strategy(n: i64) -> impl Strategy<Value = QuaternionElement> {
    let params = GroupParams::new(n).unwrap();
    (any::<bool>(), -1_000i64..1_000).prop_map(move |(is_a, i)| {
        if is_a {
            QuaternionElement::a(i, params)
        } else {
            QuaternionElement::xa(i, params)
        }
    })
}

fn group_and_triple() -> impl Strategy<Value = (i64, QuaternionElement, QuaternionElement, QuaternionElement)>
{
    (0i64..40).prop_flat_map(|n| {
        (
            Just(n),
            element_strategy(n),
            element_strategy(n),
            element_strategy(n),
        )
    })
}

/// Elements of Q_0 with indices anywhere in the i64 range, boundaries included.
fn q0_element() -> impl Strategy<Value = QuaternionElement> {
    let params = GroupParams::infinite();
    let index = prop_oneof![
        any::<i64>(),
        Just(i64::MAX),
        Just(i64::MIN),
        Just(i64::MAX - 1),
        Just(i64::MIN + 1),
    ];
    (any::<bool>(), index).prop_map(move |(is_a, i)| {
        if is_a {
            QuaternionElement::a(i, params)
        } else {
            QuaternionElement::xa(i, params)
        }
    })
}

proptest! {
    #[test]
    fn prop_associative((_n, x, y, z) in group_and_triple()) {
        prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
    }

    #[test]
    fn prop_identity((n, x, _y, _z) in group_and_triple()) {
        let g = QuaternionGroup::new(n).unwrap();
        prop_assert_eq!(&g.identity() * &x, x.clone());
        prop_assert_eq!(&x * &g.identity(), x);
    }

    #[test]
    fn prop_inverse((n, x, _y, _z) in group_and_triple()) {
        let g = QuaternionGroup::new(n).unwrap();
        prop_assert_eq!(&x.inverse() * &x, g.identity());
        prop_assert_eq!(&x * &x.inverse(), g.identity());
    }

    #[test]
    fn prop_inverse_of_product((_n, x, y, _z) in group_and_triple()) {
        prop_assert_eq!((&x * &y).inverse(), &y.inverse() * &x.inverse());
    }

    #[test]
    fn prop_pow_is_homomorphic((_n, x, _y, _z) in group_and_triple(), j in -20i64..20, k in -20i64..20) {
        prop_assert_eq!(&x.pow(j) * &x.pow(k), x.pow(j + k));
    }

    #[test]
    fn prop_xa_relations((n, _x, _y, _z) in group_and_triple(), i in -100i64..100) {
        let g = QuaternionGroup::new(n).unwrap();
        let xa = g.xa(i);
        prop_assert_eq!(xa.pow(2), g.a(n));
        prop_assert!(xa.pow(4).is_identity());
        // x a x^-1 = a^-1
        let x = g.xa(0);
        prop_assert_eq!(&(&x * &g.a(i)) * &x.inverse(), g.a(-i));
    }

    #[test]
    fn prop_order_matches_search(n in 1i64..30, i in 0i64..60, is_a in any::<bool>()) {
        let g = QuaternionGroup::new(n).unwrap();
        let x = if is_a { g.a(i) } else { g.xa(i) };
        let Order::Finite(k) = g.order_of(&x) else {
            return Err(TestCaseError::fail(format!("{} has infinite order", x)));
        };
        prop_assert_eq!(order_by_search(&x, 4 * n as u64), Some(k));
        prop_assert!(x.pow(k as i64).is_identity());
        if let Exponent::Finite(e) = g.exponent() {
            prop_assert_eq!(e % k, 0);
        }
    }

    #[test]
    fn prop_infinite_group_associative_full_range(x in q0_element(), y in q0_element(), z in q0_element()) {
        prop_assert_eq!(&(&x * &y) * &z, &x * &(&y * &z));
    }

    #[test]
    fn prop_infinite_group_inverse_full_range(x in q0_element()) {
        let g = QuaternionGroup::new(0).unwrap();
        prop_assert_eq!(&x.inverse() * &x, g.identity());
        prop_assert_eq!(&x * &x.inverse(), g.identity());
        prop_assert_eq!(x.inverse().inverse(), x);
    }

    #[test]
    fn prop_infinite_group_products_are_exact(i in any::<i64>(), j in any::<i64>()) {
        let g = QuaternionGroup::new(0).unwrap();
        let sum = i as i128 + j as i128;
        prop_assert_eq!(&g.a(i) * &g.a(j), g.a(sum));
        prop_assert_eq!(&g.a(i) * &g.xa(j), g.xa(j as i128 - i as i128));
        prop_assert_eq!(&g.xa(i) * &g.xa(j), g.a(j as i128 - i as i128));
    }
}

#[test]
fn test_exhaustive_axioms_small_groups() {
    for n in 1..=6 {
        let g = QuaternionGroup::new(n).unwrap();
        let all: Vec<_> = g.elements().unwrap().collect();
        if let Err(violation) = check_axioms(&g, &all) {
            panic!("Q_{} violates {:?} at {:?}", 4 * n, violation.axiom, violation.elements);
        }
    }
}

#[test]
fn test_sampled_axioms_infinite_group() {
    let g = QuaternionGroup::new(0).unwrap();
    let samples: Vec<_> = (-5..=5).flat_map(|i| [g.a(i * 7), g.xa(i * 3 + 1)]).collect();
    assert!(check_axioms(&g, &samples).is_ok());
}

#[test]
fn test_axioms_infinite_group_at_i64_bounds() {
    let g = QuaternionGroup::new(0).unwrap();
    let samples: Vec<_> = [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX - 1, i64::MAX]
        .into_iter()
        .flat_map(|i| [g.a(i), g.xa(i)])
        .collect();
    if let Err(violation) = check_axioms(&g, &samples) {
        panic!("Q_0 violates {:?} at {:?}", violation.axiom, violation.elements);
    }
}

#[test]
fn test_cardinality_is_4n() {
    for n in [1, 2, 3, 5] {
        let g = QuaternionGroup::new(n).unwrap();
        let distinct: HashSet<_> = g.elements().unwrap().collect();
        assert_eq!(distinct.len(), 4 * n as usize);
    }
}

#[test]
fn test_orders() {
    for n in 1..=8i64 {
        let g = QuaternionGroup::new(n).unwrap();
        assert_eq!(g.order_of(&g.a(1)), Order::Finite(2 * n as u64));
        for i in 0..2 * n {
            assert_eq!(g.order_of(&g.xa(i)), Order::Finite(4));
        }
    }
}

#[test]
fn test_exponent_values() {
    let e = |n| exponent(&GroupParams::new(n).unwrap());
    assert_eq!(e(1), Exponent::Finite(4));
    assert_eq!(e(3), Exponent::Finite(12));
    assert_eq!(e(4), Exponent::Finite(8));
    assert_eq!(e(0), Exponent::Unbounded);
}

#[test]
fn test_exponent_is_lcm_of_orders() {
    for n in 1..=12 {
        let g = QuaternionGroup::new(n).unwrap();
        let lcm = g
            .elements()
            .unwrap()
            .map(|x| match g.order_of(&x) {
                Order::Finite(k) => k,
                Order::Infinite => panic!("{} has infinite order", x),
            })
            .fold(1u64, num_integer::lcm);
        assert_eq!(g.exponent(), Exponent::Finite(lcm), "Q_{}", 4 * n);
    }
}

#[test]
fn test_q4_cyclic_generated_by_xa0() {
    let g = QuaternionGroup::new(1).unwrap();
    assert!(g.is_cyclic());
    let generated: HashSet<_> = (0..4).map(|k| g.xa(0).pow(k)).collect();
    let all: HashSet<_> = g.elements().unwrap().collect();
    assert_eq!(generated, all);
}

#[test]
fn test_infinite_group_orders() {
    let g = QuaternionGroup::new(0).unwrap();
    assert_eq!(g.order_of(&g.a(1)), Order::Infinite);
    assert!(g.order_of(&g.a(1)).finite_or_err(&g.a(1)).is_err());
    assert_eq!(g.order_of(&g.identity()), Order::Finite(1));
    assert_eq!(g.exponent(), Exponent::Unbounded);
}
