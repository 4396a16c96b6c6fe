//! Modular integers over Z_m, with Z itself as the `m = 0` case.
//!
//! The quaternion group Q_{4n} indexes its elements by Z_{2n}. When `n = 0`
//! the ring collapses to the integers, and values are then exact
//! arbitrary-precision integers.
//!
//! # Example
//!
//! ```
//! use quaternion_group::math::{Modulus, ZMod};
//!
//! let m = Modulus::new(6);
//! let a = ZMod::from_nat(4, m);
//! let b = ZMod::from_nat(5, m);
//! assert_eq!((&a + &b).residue(), Some(3));
//! assert_eq!((&a - &b).residue(), Some(5));
//!
//! let z = Modulus::unbounded();
//! let big = ZMod::from_int(i64::MAX, z) + ZMod::one(z);
//! assert_eq!(big.to_string(), "9223372036854775808");
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

/// The modulus of a [`ZMod`]: a ring size, with `0` standing for Z.
///
/// # Example
///
/// ```
/// use quaternion_group::math::Modulus;
///
/// assert_eq!(Modulus::new(8).finite(), Some(8));
/// assert!(!Modulus::new(0).is_finite());
/// assert_eq!(Modulus::new(0), Modulus::unbounded());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct Modulus {
    size: u64,
}

impl Modulus {
    /// Creates the modulus of Z_m.
    ///
    /// # Arguments
    ///
    /// * `size` - The ring size m; `0` selects the integers
    pub fn new(size: u64) -> Self {
        Self { size }
    }

    /// The modulus of Z, used by the infinite groups.
    pub fn unbounded() -> Self {
        Self { size: 0 }
    }

    /// Ring size, with `0` standing for the integers.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Ring size when the ring is finite.
    pub fn finite(&self) -> Option<u64> {
        (self.size != 0).then_some(self.size)
    }

    /// True for Z_m with m > 0.
    pub fn is_finite(&self) -> bool {
        self.size != 0
    }
}

impl From<u64> for Modulus {
    fn from(size: u64) -> Self {
        Self::new(size)
    }
}

impl From<Modulus> for u64 {
    fn from(modulus: Modulus) -> Self {
        modulus.size
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.finite() {
            Some(m) => write!(f, "Z/{}", m),
            None => write!(f, "Z"),
        }
    }
}

/// Element of Z_m, or of Z when the modulus is unbounded.
///
/// Finite residues are kept in `[0, m)` as `u64` and combined in `u128`, so no
/// intermediate overflows. Integers are exact [`BigInt`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawZMod", into = "RawZMod")]
pub struct ZMod {
    repr: Repr,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Repr {
    Residue { value: u64, modulus: u64 },
    Integer(BigInt),
}

/// Serialized form; reduced again on the way in.
#[derive(Clone, Serialize, Deserialize)]
struct RawZMod {
    value: BigInt,
    modulus: Modulus,
}

impl From<RawZMod> for ZMod {
    fn from(raw: RawZMod) -> Self {
        ZMod::from_int(raw.value, raw.modulus)
    }
}

impl From<ZMod> for RawZMod {
    fn from(z: ZMod) -> Self {
        RawZMod {
            value: z.value(),
            modulus: z.modulus(),
        }
    }
}

impl ZMod {
    /// Casts an integer into the ring.
    ///
    /// # Arguments
    ///
    /// * `value` - Any integer convertible to [`BigInt`]; reduced for finite moduli
    /// * `modulus` - The ring
    ///
    /// # Example
    ///
    /// ```
    /// use quaternion_group::math::{Modulus, ZMod};
    ///
    /// assert_eq!(ZMod::from_int(-1, Modulus::new(6)).residue(), Some(5));
    /// assert_eq!(ZMod::from_int(-1, Modulus::unbounded()).to_i64(), Some(-1));
    /// ```
    pub fn from_int(value: impl Into<BigInt>, modulus: Modulus) -> Self {
        let value = value.into();
        let repr = match modulus.finite() {
            Some(m) => Repr::Residue {
                value: reduce_big(&value, m),
                modulus: m,
            },
            None => Repr::Integer(value),
        };
        Self { repr }
    }

    /// Casts a natural number into the ring.
    pub fn from_nat(value: u64, modulus: Modulus) -> Self {
        Self::from_int(value, modulus)
    }

    /// The additive identity of the ring.
    pub fn zero(modulus: Modulus) -> Self {
        Self::from_nat(0, modulus)
    }

    /// `1` in the ring (which is `0` in Z/1).
    pub fn one(modulus: Modulus) -> Self {
        Self::from_nat(1, modulus)
    }

    /// The representative: in `[0, m)` for finite moduli, exact otherwise.
    pub fn value(&self) -> BigInt {
        match &self.repr {
            Repr::Residue { value, .. } => BigInt::from(*value),
            Repr::Integer(v) => v.clone(),
        }
    }

    /// Canonical non-negative representative.
    ///
    /// In `[0, m)` for a finite modulus; the absolute value over Z.
    pub fn val(&self) -> BigUint {
        match &self.repr {
            Repr::Residue { value, .. } => BigUint::from(*value),
            Repr::Integer(v) => v.magnitude().clone(),
        }
    }

    /// The reduced value in `[0, m)`, or `None` over Z.
    pub fn residue(&self) -> Option<u64> {
        match &self.repr {
            Repr::Residue { value, .. } => Some(*value),
            Repr::Integer(_) => None,
        }
    }

    /// The representative as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        match &self.repr {
            Repr::Residue { value, .. } => i64::try_from(*value).ok(),
            Repr::Integer(v) => v.to_i64(),
        }
    }

    /// The ring this value lives in.
    pub fn modulus(&self) -> Modulus {
        match &self.repr {
            Repr::Residue { modulus, .. } => Modulus::new(*modulus),
            Repr::Integer(_) => Modulus::unbounded(),
        }
    }

    /// True for the additive identity.
    pub fn is_zero(&self) -> bool {
        match &self.repr {
            Repr::Residue { value, .. } => *value == 0,
            Repr::Integer(v) => v.is_zero(),
        }
    }

    /// `k * self`, the k-fold sum in the additive group.
    ///
    /// # Example
    ///
    /// ```
    /// use quaternion_group::math::{Modulus, ZMod};
    ///
    /// let x = ZMod::from_nat(3, Modulus::new(8));
    /// assert_eq!(x.scale(5).residue(), Some(7));
    /// assert_eq!(x.scale(-1), -x);
    /// ```
    pub fn scale(&self, k: i64) -> Self {
        let repr = match &self.repr {
            Repr::Residue { value, modulus } => {
                let m = *modulus as u128;
                let k = (k as i128).rem_euclid(m as i128) as u128;
                Repr::Residue {
                    value: ((*value as u128 * k) % m) as u64,
                    modulus: *modulus,
                }
            }
            Repr::Integer(v) => Repr::Integer(v * k),
        };
        Self { repr }
    }

    /// Order of this value in the additive group of the ring.
    ///
    /// `m / gcd(m, val)` for a finite modulus, where `gcd(m, 0) = m`.
    /// Over Z only zero has finite order, so `None` is returned for anything else.
    pub fn additive_order(&self) -> Option<u64> {
        match &self.repr {
            Repr::Residue { value, modulus } => Some(modulus / modulus.gcd(value)),
            Repr::Integer(v) if v.is_zero() => Some(1),
            Repr::Integer(_) => None,
        }
    }

    /// Applies a ring operation, reading `rhs` in `self`'s ring if the moduli differ.
    fn combine(
        &self,
        rhs: &Self,
        residue: fn(u128, u128, u128) -> u128,
        integer: fn(&BigInt, &BigInt) -> BigInt,
    ) -> Self {
        let repr = match (&self.repr, &rhs.repr) {
            (Repr::Residue { value: a, modulus }, Repr::Residue { value: b, modulus: m2 })
                if modulus == m2 =>
            {
                Repr::Residue {
                    value: residue(*a as u128, *b as u128, *modulus as u128) as u64,
                    modulus: *modulus,
                }
            }
            (Repr::Integer(a), Repr::Integer(b)) => Repr::Integer(integer(a, b)),
            _ => {
                debug_assert_eq!(self.modulus(), rhs.modulus(), "Moduli must match");
                let rhs = Self::from_int(rhs.value(), self.modulus());
                return self.combine(&rhs, residue, integer);
            }
        };
        Self { repr }
    }
}

/// `value mod m` in `[0, m)`.
fn reduce_big(value: &BigInt, m: u64) -> u64 {
    let (_, digits) = value.mod_floor(&BigInt::from(m)).to_u64_digits();
    // the remainder is below m, so it has at most one digit
    digits.first().copied().unwrap_or(0)
}

impl fmt::Display for ZMod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Residue { value, .. } => write!(f, "{}", value),
            Repr::Integer(v) => write!(f, "{}", v),
        }
    }
}

impl Add<&ZMod> for &ZMod {
    type Output = ZMod;

    fn add(self, rhs: &ZMod) -> ZMod {
        self.combine(rhs, |a, b, m| (a + b) % m, |a, b| a + b)
    }
}

impl Add for ZMod {
    type Output = ZMod;

    fn add(self, rhs: ZMod) -> ZMod {
        &self + &rhs
    }
}

impl Sub<&ZMod> for &ZMod {
    type Output = ZMod;

    fn sub(self, rhs: &ZMod) -> ZMod {
        self.combine(rhs, |a, b, m| (a + m - b) % m, |a, b| a - b)
    }
}

impl Sub for ZMod {
    type Output = ZMod;

    fn sub(self, rhs: ZMod) -> ZMod {
        &self - &rhs
    }
}

impl Mul<&ZMod> for &ZMod {
    type Output = ZMod;

    fn mul(self, rhs: &ZMod) -> ZMod {
        self.combine(rhs, |a, b, m| (a * b) % m, |a, b| a * b)
    }
}

impl Mul for ZMod {
    type Output = ZMod;

    fn mul(self, rhs: ZMod) -> ZMod {
        &self * &rhs
    }
}

impl Neg for &ZMod {
    type Output = ZMod;

    fn neg(self) -> ZMod {
        let repr = match &self.repr {
            Repr::Residue { value, modulus } => Repr::Residue {
                value: if *value == 0 { 0 } else { modulus - value },
                modulus: *modulus,
            },
            Repr::Integer(v) => Repr::Integer(-v),
        };
        ZMod { repr }
    }
}

impl Neg for ZMod {
    type Output = ZMod;

    fn neg(self) -> ZMod {
        -&self
    }
}
