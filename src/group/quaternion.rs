//! The group Q_{4n} as a whole: enumeration, cardinality, exponent, sampling.

use num_bigint::BigInt;
use rand::Rng;
use tracing::debug;

use crate::error::{GroupError, Result};
use crate::group::element::{ElementKind, QuaternionElement};
use crate::group::order::{self, Exponent, Order};
use crate::group::traits::Group;
use crate::math::{Modulus, ZMod};
use crate::params::GroupParams;

/// The generalized quaternion group of order 4n (infinite when n = 0).
///
/// # Example
///
/// ```
/// use quaternion_group::{Exponent, Order, QuaternionGroup};
///
/// let q8 = QuaternionGroup::new(2).unwrap();
/// assert_eq!(q8.cardinality().unwrap(), 8);
/// assert_eq!(q8.order_of(&q8.xa(1)), Order::Finite(4));
/// assert_eq!(q8.exponent(), Exponent::Finite(4));
/// assert_eq!(q8.xa(0) * q8.xa(0), q8.a(2));
///
/// let q0 = QuaternionGroup::new(0).unwrap();
/// let big = &q0.a(i64::MAX) * &q0.a(1);
/// assert_eq!(big.to_string(), "a9223372036854775808");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuaternionGroup {
    params: GroupParams,
}

impl QuaternionGroup {
    /// Q_{4n}; negative or oversized n is rejected.
    ///
    /// # Arguments
    ///
    /// * `n` - Half the order of `a(1)`; 0 selects the infinite group
    pub fn new(n: i64) -> Result<Self> {
        Ok(Self::from_params(GroupParams::new(n)?))
    }

    /// The group described by already-validated parameters.
    pub fn from_params(params: GroupParams) -> Self {
        debug!(n = params.n(), modulus = %params.ring_modulus(), "quaternion group");
        Self { params }
    }

    pub fn params(&self) -> GroupParams {
        self.params
    }

    pub fn n(&self) -> u64 {
        self.params.n()
    }

    /// Modulus of the index ring Z_{2n}.
    pub fn modulus(&self) -> Modulus {
        self.params.ring_modulus()
    }

    /// The identity `a(0)`.
    pub fn identity(&self) -> QuaternionElement {
        QuaternionElement::identity(self.params)
    }

    /// `a^i`, with `i` reduced mod 2n.
    pub fn a(&self, i: impl Into<BigInt>) -> QuaternionElement {
        QuaternionElement::a(i, self.params)
    }

    /// `x a^i`, with `i` reduced mod 2n.
    pub fn xa(&self, i: impl Into<BigInt>) -> QuaternionElement {
        QuaternionElement::xa(i, self.params)
    }

    /// True when `x` was built for this group.
    pub fn contains(&self, x: &QuaternionElement) -> bool {
        x.modulus() == self.modulus()
    }

    /// `x * y`; see [`QuaternionElement::multiply`].
    pub fn multiply(&self, x: &QuaternionElement, y: &QuaternionElement) -> QuaternionElement {
        x.multiply(y)
    }

    /// See [`QuaternionElement::inverse`].
    pub fn inverse(&self, x: &QuaternionElement) -> QuaternionElement {
        x.inverse()
    }

    /// `a(1)^k`, which is `a(k)`.
    pub fn a_one_pow(&self, k: i64) -> QuaternionElement {
        self.a(1).pow(k)
    }

    /// See [`order::order_of`].
    pub fn order_of(&self, x: &QuaternionElement) -> Order {
        order::order_of(x)
    }

    /// Number of elements, 4n.
    pub fn cardinality(&self) -> Result<u64> {
        self.params.order().ok_or(GroupError::UnboundedEnumeration)
    }

    /// All 4n elements: `a(0..2n)` followed by `xa(0..2n)`.
    pub fn elements(&self) -> Result<impl Iterator<Item = QuaternionElement>> {
        let card = self.cardinality()?;
        debug!(n = self.n(), count = card, "enumerating elements");
        let modulus = self.modulus();
        let half = 2 * self.n();
        let a = (0..half)
            .map(move |i| QuaternionElement::from_parts(ElementKind::A, ZMod::from_nat(i, modulus)));
        let xa = (0..half)
            .map(move |i| QuaternionElement::from_parts(ElementKind::Xa, ZMod::from_nat(i, modulus)));
        Ok(a.chain(xa))
    }

    pub fn exponent(&self) -> Exponent {
        order::exponent(&self.params)
    }

    /// An element whose powers exhaust the group, if one exists.
    ///
    /// Orders are 4 for `xa(i)` and at most 2n for `a(i)`, so only Q_4
    /// (n = 1) is cyclic, generated by `xa(0)`.
    pub fn cyclic_generator(&self) -> Option<QuaternionElement> {
        let card = self.params.order()?;
        [self.xa(0), self.a(1)]
            .into_iter()
            .find(|g| self.order_of(g) == Order::Finite(card))
    }

    pub fn is_cyclic(&self) -> bool {
        self.cyclic_generator().is_some()
    }

    /// A uniformly random element.
    pub fn random_element<R: Rng>(&self, rng: &mut R) -> Result<QuaternionElement> {
        let card = self.cardinality()?;
        let half = card / 2;
        let k = rng.gen_range(0..card);
        let index = ZMod::from_nat(k % half, self.modulus());
        let kind = if k < half { ElementKind::A } else { ElementKind::Xa };
        Ok(QuaternionElement::from_parts(kind, index))
    }

    /// Full multiplication table, rows and columns in [`elements`](Self::elements) order.
    ///
    /// Quadratic in the group order.
    pub fn cayley_table(&self) -> Result<Vec<Vec<QuaternionElement>>> {
        let elements: Vec<_> = self.elements()?.collect();
        Ok(elements
            .iter()
            .map(|x| elements.iter().map(|y| x.multiply(y)).collect())
            .collect())
    }
}

impl Group for QuaternionGroup {
    type Element = QuaternionElement;

    fn identity(&self) -> QuaternionElement {
        QuaternionGroup::identity(self)
    }

    fn multiply(&self, x: &QuaternionElement, y: &QuaternionElement) -> QuaternionElement {
        QuaternionGroup::multiply(self, x, y)
    }

    fn inverse(&self, x: &QuaternionElement) -> QuaternionElement {
        QuaternionGroup::inverse(self, x)
    }
}
