//! Elements of Q_{4n} and their multiplication.
//!
//! Every element is either `a(i)` or `xa(i)` with `i` in Z_{2n}. The group is
//! generated by `a = a(1)` of order 2n and `x = xa(0)` with `x^2 = a^n` and
//! `x a x^{-1} = a^{-1}`.
//!
//! # Example
//!
//! ```
//! use quaternion_group::{GroupParams, QuaternionElement};
//!
//! let q8 = GroupParams::q8();
//! let i = QuaternionElement::xa(0, q8);
//! let j = QuaternionElement::xa(1, q8);
//! assert_eq!(&i * &i, QuaternionElement::a(2, q8));
//! assert_eq!(&i * &j, QuaternionElement::a(3, q8));
//! ```

use std::fmt;
use std::ops::Mul;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{GroupError, Result};
use crate::math::{Modulus, ZMod};
use crate::params::GroupParams;

/// Which of the two families an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// `a^i`
    A,
    /// `x a^i`
    Xa,
}

/// An element of the generalized quaternion group.
///
/// The index always lives in Z_{2n} for a validated n (or in Z for n = 0);
/// elements are only built from [`GroupParams`] or from other elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QuaternionElement {
    kind: ElementKind,
    index: ZMod,
}

impl QuaternionElement {
    /// Creates `a^i`.
    ///
    /// # Arguments
    ///
    /// * `i` - The exponent, reduced mod 2n (kept exact when n = 0)
    /// * `params` - The group
    ///
    /// # Example
    ///
    /// ```
    /// use quaternion_group::{GroupParams, QuaternionElement};
    ///
    /// let params = GroupParams::new(3).unwrap();
    /// assert_eq!(QuaternionElement::a(7, params), QuaternionElement::a(1, params));
    /// ```
    pub fn a(i: impl Into<BigInt>, params: GroupParams) -> Self {
        Self::from_parts(ElementKind::A, ZMod::from_int(i, params.ring_modulus()))
    }

    /// Creates `x a^i`.
    ///
    /// # Arguments
    ///
    /// * `i` - The exponent, reduced mod 2n (kept exact when n = 0)
    /// * `params` - The group
    pub fn xa(i: impl Into<BigInt>, params: GroupParams) -> Self {
        Self::from_parts(ElementKind::Xa, ZMod::from_int(i, params.ring_modulus()))
    }

    /// The identity `a(0)` of the group described by `params`.
    pub fn identity(params: GroupParams) -> Self {
        Self::a(0, params)
    }

    /// Callers guarantee `index` lives in a ring Z_{2n} or Z.
    pub(crate) fn from_parts(kind: ElementKind, index: ZMod) -> Self {
        Self { kind, index }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The exponent `i` of `a(i)` or `xa(i)`.
    pub fn index(&self) -> &ZMod {
        &self.index
    }

    /// Modulus of the index ring, Z_{2n}.
    pub fn modulus(&self) -> Modulus {
        self.index.modulus()
    }

    /// The group parameter n this element belongs to.
    pub fn n(&self) -> u64 {
        self.modulus().size() / 2
    }

    pub fn is_identity(&self) -> bool {
        self.kind == ElementKind::A && self.index.is_zero()
    }

    fn identity_like(&self) -> Self {
        Self::from_parts(ElementKind::A, ZMod::zero(self.modulus()))
    }

    /// `n` as an element of the index ring.
    fn half_turn(&self) -> ZMod {
        ZMod::from_nat(self.n(), self.modulus())
    }

    /// Group multiplication `self * rhs`.
    ///
    /// Both operands must come from the same group; this is checked in debug
    /// builds only. Use [`QuaternionElement::try_multiply`] for a checked version.
    ///
    /// # Example
    ///
    /// ```
    /// use quaternion_group::{GroupParams, QuaternionElement};
    ///
    /// let p = GroupParams::infinite();
    /// let product = QuaternionElement::a(2, p).multiply(&QuaternionElement::xa(3, p));
    /// assert_eq!(product, QuaternionElement::xa(1, p));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.modulus(), rhs.modulus(), "Moduli must match");
        let (i, j) = (&self.index, &rhs.index);
        match (self.kind, rhs.kind) {
            (ElementKind::A, ElementKind::A) => Self::from_parts(ElementKind::A, i + j),
            (ElementKind::A, ElementKind::Xa) => Self::from_parts(ElementKind::Xa, j - i),
            (ElementKind::Xa, ElementKind::A) => Self::from_parts(ElementKind::Xa, i + j),
            (ElementKind::Xa, ElementKind::Xa) => {
                Self::from_parts(ElementKind::A, &(&self.half_turn() + j) - i)
            }
        }
    }

    /// Multiplication that rejects operands from different groups.
    pub fn try_multiply(&self, rhs: &Self) -> Result<Self> {
        if self.modulus() != rhs.modulus() {
            return Err(GroupError::ModulusMismatch {
                left: self.modulus().to_string(),
                right: rhs.modulus().to_string(),
            });
        }
        Ok(self.multiply(rhs))
    }

    /// The group inverse: `a(i)^{-1} = a(-i)` and `xa(i)^{-1} = xa(n + i)`.
    pub fn inverse(&self) -> Self {
        match self.kind {
            ElementKind::A => Self::from_parts(ElementKind::A, -&self.index),
            ElementKind::Xa => Self::from_parts(ElementKind::Xa, &self.half_turn() + &self.index),
        }
    }

    /// `self^k` for any integer k, in closed form.
    ///
    /// `a(i)^k = a(k i)`; powers of `xa(i)` cycle through
    /// `1, xa(i), a(n), xa(n + i)`.
    ///
    /// # Arguments
    ///
    /// * `k` - The exponent; negative values give powers of the inverse
    pub fn pow(&self, k: i64) -> Self {
        match self.kind {
            ElementKind::A => Self::from_parts(ElementKind::A, self.index.scale(k)),
            ElementKind::Xa => match k.rem_euclid(4) {
                0 => self.identity_like(),
                1 => self.clone(),
                2 => Self::from_parts(ElementKind::A, self.half_turn()),
                _ => self.inverse(),
            },
        }
    }
}

impl Mul<&QuaternionElement> for &QuaternionElement {
    type Output = QuaternionElement;

    fn mul(self, rhs: &QuaternionElement) -> QuaternionElement {
        self.multiply(rhs)
    }
}

impl Mul for QuaternionElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl fmt::Display for QuaternionElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ElementKind::A => write!(f, "a{}", self.index),
            ElementKind::Xa => write!(f, "xa{}", self.index),
        }
    }
}
