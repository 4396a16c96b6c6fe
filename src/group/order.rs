//! Element orders and the group exponent.
//!
//! Orders come from closed forms: `a(i)` has the additive order of `i` in
//! Z_{2n}, and every `xa(i)` has order 4 (order 2 when n = 0, where
//! `xa(i)^2 = a(0)`). Repeated multiplication is only used by
//! [`order_by_search`], which is bounded and exists to cross-check the formulas.

use std::fmt;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

use crate::error::{GroupError, Result};
use crate::group::element::{ElementKind, QuaternionElement};
use crate::params::GroupParams;

/// Order of a group element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
    /// Smallest k >= 1 with `x^k = 1`
    Finite(u64),
    /// No positive power is the identity
    Infinite,
}

impl Order {
    pub fn is_finite(&self) -> bool {
        matches!(self, Order::Finite(_))
    }

    /// The numeric order, or `InfiniteOrder` naming `element`.
    pub fn finite_or_err(&self, element: &QuaternionElement) -> Result<u64> {
        match self {
            Order::Finite(k) => Ok(*k),
            Order::Infinite => Err(GroupError::InfiniteOrder {
                element: element.to_string(),
            }),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Finite(k) => write!(f, "{}", k),
            Order::Infinite => write!(f, "infinite"),
        }
    }
}

/// Exponent of a group: lcm of all element orders.
///
/// Zero is never used to mean "no finite exponent"; the infinite group Q_0
/// reports [`Exponent::Unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exponent {
    Finite(u64),
    Unbounded,
}

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exponent::Finite(k) => write!(f, "{}", k),
            Exponent::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Order of `x` in its group.
pub fn order_of(x: &QuaternionElement) -> Order {
    match x.kind() {
        ElementKind::A => match x.index().additive_order() {
            Some(k) => Order::Finite(k),
            None => Order::Infinite,
        },
        ElementKind::Xa if x.n() == 0 => Order::Finite(2),
        ElementKind::Xa => Order::Finite(4),
    }
}

/// Order of `x` found by repeated multiplication, trying at most `bound` powers.
///
/// The bound is clamped to the group order 4n for finite groups. Returns
/// `None` when no power up to the bound is the identity.
pub fn order_by_search(x: &QuaternionElement, bound: u64) -> Option<u64> {
    let limit = match x.n() {
        0 => bound,
        n => bound.min(4 * n),
    };
    let mut power = x.clone();
    for k in 1..=limit {
        if power.is_identity() {
            return Some(k);
        }
        power = &power * x;
    }
    None
}

/// Exponent of Q_{4n}: `2 * lcm(n, 2)` for n > 0.
pub fn exponent(params: &GroupParams) -> Exponent {
    match params.n() {
        0 => Exponent::Unbounded,
        n => Exponent::Finite(2 * n.lcm(&2)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(n: i64) -> GroupParams {
        GroupParams::new(n).unwrap()
    }

    #[test]
    fn test_order_of_a_one() {
        for n in [1, 2, 3, 5, 8] {
            let p = params(n);
            assert_eq!(
                order_of(&QuaternionElement::a(1, p)),
                Order::Finite(2 * n as u64)
            );
        }
    }

    #[test]
    fn test_order_of_a_gcd_formula() {
        let p = params(6);
        let expected = [1, 12, 6, 4, 3, 12, 2, 12, 3, 4, 6, 12];
        for (i, want) in expected.iter().enumerate() {
            assert_eq!(
                order_of(&QuaternionElement::a(i as i64, p)),
                Order::Finite(*want),
                "a{}",
                i
            );
        }
    }

    #[test]
    fn test_order_of_xa_is_four() {
        for n in 1..=6 {
            let p = params(n);
            for i in 0..2 * n {
                assert_eq!(order_of(&QuaternionElement::xa(i, p)), Order::Finite(4));
            }
        }
    }

    #[test]
    fn test_degenerate_orders() {
        let p = params(0);
        assert_eq!(order_of(&QuaternionElement::a(1, p)), Order::Infinite);
        assert_eq!(order_of(&QuaternionElement::a(-4, p)), Order::Infinite);
        assert_eq!(order_of(&QuaternionElement::a(0, p)), Order::Finite(1));
        assert_eq!(order_of(&QuaternionElement::xa(9, p)), Order::Finite(2));
    }

    #[test]
    fn test_infinite_order_error() {
        let p = params(0);
        let x = QuaternionElement::a(1, p);
        let err = order_of(&x).finite_or_err(&x).unwrap_err();
        assert_eq!(
            err,
            GroupError::InfiniteOrder {
                element: "a1".to_string()
            }
        );
    }

    #[test]
    fn test_search_agrees_with_formula() {
        for n in 1..=7 {
            let p = params(n);
            for i in 0..2 * n {
                for x in [QuaternionElement::a(i, p), QuaternionElement::xa(i, p)] {
                    let Order::Finite(k) = order_of(&x) else {
                        panic!("{} should have finite order", x);
                    };
                    assert_eq!(order_by_search(&x, u64::MAX), Some(k));
                }
            }
        }
    }

    #[test]
    fn test_search_is_bounded() {
        let p = params(0);
        assert_eq!(order_by_search(&QuaternionElement::a(1, p), 1_000), None);

        let p = params(50);
        assert_eq!(order_by_search(&QuaternionElement::a(1, p), 10), None);
    }

    #[test]
    fn test_exponent() {
        assert_eq!(exponent(&params(1)), Exponent::Finite(4));
        assert_eq!(exponent(&params(2)), Exponent::Finite(4));
        // lcm(a-order 6, xa-order 4)
        assert_eq!(exponent(&params(3)), Exponent::Finite(12));
        assert_eq!(exponent(&params(4)), Exponent::Finite(8));
        assert_eq!(exponent(&params(0)), Exponent::Unbounded);
    }
}
