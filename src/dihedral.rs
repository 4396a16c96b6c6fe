//! Dihedral groups D_n and the isomorphism Q_0 ≅ D_∞.
//!
//! `D_n` has rotations `r(i)` and reflections `sr(i)` indexed by Z_n; n = 0
//! gives the infinite dihedral group. When n = 0 the quaternion relation
//! `xa(i)^2 = a(n)` degenerates to `xa(i)^2 = 1`, and the multiplication
//! tables of Q_0 and D_∞ coincide under `a(j) ↦ r(j)`, `xa(j) ↦ sr(j)`.

use std::fmt;
use std::ops::Mul;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::error::{GroupError, Result};
use crate::group::{ElementKind, Group, QuaternionElement};
use crate::math::{Modulus, ZMod};

/// An element of D_n. Any index ring Z_n (or Z) describes a valid group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DihedralElement {
    /// `r(i)`
    Rotation(ZMod),
    /// `sr(i)`
    Reflection(ZMod),
}

use DihedralElement::{Reflection, Rotation};

impl DihedralElement {
    /// The identity rotation `r(0)`.
    ///
    /// # Arguments
    ///
    /// * `modulus` - The index ring Z_n of the group
    pub fn identity(modulus: Modulus) -> Self {
        Rotation(ZMod::zero(modulus))
    }

    /// The index ring Z_n this element lives over.
    pub fn modulus(&self) -> Modulus {
        match self {
            Rotation(i) | Reflection(i) => i.modulus(),
        }
    }

    /// Group multiplication `self * rhs`.
    ///
    /// # Example
    ///
    /// ```
    /// use quaternion_group::DihedralGroup;
    ///
    /// let d = DihedralGroup::new(5);
    /// assert_eq!(d.rotation(2).multiply(&d.reflection(3)), d.reflection(1));
    /// assert_eq!(d.reflection(1).multiply(&d.reflection(4)), d.rotation(3));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.modulus(), rhs.modulus(), "Moduli must match");
        match (self, rhs) {
            (Rotation(i), Rotation(j)) => Rotation(i + j),
            (Rotation(i), Reflection(j)) => Reflection(j - i),
            (Reflection(i), Rotation(j)) => Reflection(i + j),
            (Reflection(i), Reflection(j)) => Rotation(j - i),
        }
    }

    /// The group inverse: rotations negate, reflections are involutions.
    pub fn inverse(&self) -> Self {
        match self {
            Rotation(i) => Rotation(-i),
            Reflection(i) => Reflection(i.clone()),
        }
    }
}

impl Mul<&DihedralElement> for &DihedralElement {
    type Output = DihedralElement;

    fn mul(self, rhs: &DihedralElement) -> DihedralElement {
        self.multiply(rhs)
    }
}

impl Mul for DihedralElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl fmt::Display for DihedralElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation(i) => write!(f, "r{}", i),
            Reflection(i) => write!(f, "sr{}", i),
        }
    }
}

/// The dihedral group of order 2n (infinite when n = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DihedralGroup {
    modulus: Modulus,
}

impl DihedralGroup {
    /// D_n, the symmetries of a regular n-gon; `0` gives D_∞.
    pub fn new(n: u64) -> Self {
        Self {
            modulus: Modulus::new(n),
        }
    }

    /// D_∞, the target of [`to_dihedral_infinite`].
    pub fn infinite() -> Self {
        Self::new(0)
    }

    /// The rotation `r(i)`, with `i` reduced mod n.
    pub fn rotation(&self, i: impl Into<BigInt>) -> DihedralElement {
        Rotation(ZMod::from_int(i, self.modulus))
    }

    /// The reflection `sr(i)`.
    pub fn reflection(&self, i: impl Into<BigInt>) -> DihedralElement {
        Reflection(ZMod::from_int(i, self.modulus))
    }

    /// All 2n elements: rotations then reflections.
    pub fn elements(&self) -> Result<Vec<DihedralElement>> {
        let n = self.modulus.finite().ok_or(GroupError::UnboundedEnumeration)?;
        let rotations = (0..n).map(|i| Rotation(ZMod::from_nat(i, self.modulus)));
        let reflections = (0..n).map(|i| Reflection(ZMod::from_nat(i, self.modulus)));
        Ok(rotations.chain(reflections).collect())
    }
}

impl Group for DihedralGroup {
    type Element = DihedralElement;

    fn identity(&self) -> DihedralElement {
        DihedralElement::identity(self.modulus)
    }

    fn multiply(&self, x: &DihedralElement, y: &DihedralElement) -> DihedralElement {
        x.multiply(y)
    }

    fn inverse(&self, x: &DihedralElement) -> DihedralElement {
        x.inverse()
    }
}

/// Maps an element of Q_0 to D_∞: `a(j) ↦ r(j)`, `xa(j) ↦ sr(j)`.
///
/// # Example
///
/// ```
/// use quaternion_group::{to_dihedral_infinite, DihedralGroup, QuaternionGroup};
///
/// let q0 = QuaternionGroup::new(0).unwrap();
/// let d = DihedralGroup::infinite();
/// assert_eq!(to_dihedral_infinite(&q0.xa(-3)).unwrap(), d.reflection(-3));
/// ```
pub fn to_dihedral_infinite(x: &QuaternionElement) -> Result<DihedralElement> {
    if x.modulus().is_finite() {
        return Err(GroupError::NotDegenerate { n: x.n() });
    }
    let j = x.index().clone();
    Ok(match x.kind() {
        ElementKind::A => Rotation(j),
        ElementKind::Xa => Reflection(j),
    })
}

/// Inverse of [`to_dihedral_infinite`].
pub fn from_dihedral_infinite(d: &DihedralElement) -> Result<QuaternionElement> {
    if d.modulus().is_finite() {
        return Err(GroupError::NotDegenerate {
            n: d.modulus().size(),
        });
    }
    // the index ring is Z, which is the ring of Q_0
    Ok(match d {
        Rotation(j) => QuaternionElement::from_parts(ElementKind::A, j.clone()),
        Reflection(j) => QuaternionElement::from_parts(ElementKind::Xa, j.clone()),
    })
}
