//! Parameters for the generalized quaternion group Q_{4n}
//!
//! The single parameter n fixes the index ring Z_{2n} and the group order 4n.
//! A `GroupParams` value is always validated: the field is private and every
//! constructor, including deserialization, goes through [`GroupParams::validate`].

use serde::{Deserialize, Serialize};

use crate::error::{GroupError, Result};
use crate::math::Modulus;

/// Largest supported n: keeps the group order 4n within `u64`.
pub const MAX_N: u64 = u64::MAX / 4;

/// Validated group parameter
///
/// # Example
///
/// ```
/// use quaternion_group::GroupParams;
///
/// let params = GroupParams::new(3).unwrap();
/// assert_eq!(params.n(), 3);
/// assert_eq!(params.order(), Some(12));
/// assert!(GroupParams::new(-1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGroupParams")]
pub struct GroupParams {
    /// Half the size of the index ring; the group has 4n elements.
    /// n = 0 selects the infinite group over Z.
    n: u64,
}

#[derive(Deserialize)]
struct RawGroupParams {
    n: u64,
}

impl TryFrom<RawGroupParams> for GroupParams {
    type Error = GroupError;

    fn try_from(raw: RawGroupParams) -> Result<Self> {
        Self::from_nat(raw.n)
    }
}

impl GroupParams {
    /// Parameters for a signed n, rejecting negative or oversized values
    pub fn new(n: i64) -> Result<Self> {
        if n < 0 {
            return Err(GroupError::InvalidModulus {
                n: n as i128,
                max: MAX_N,
            });
        }
        Self::from_nat(n as u64)
    }

    pub fn from_nat(n: u64) -> Result<Self> {
        let params = Self { n };
        params.validate()?;
        Ok(params)
    }

    /// The classic quaternion group Q_8
    pub fn q8() -> Self {
        Self { n: 2 }
    }

    /// The infinite group Q_0
    pub fn infinite() -> Self {
        Self { n: 0 }
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<()> {
        if self.n > MAX_N {
            return Err(GroupError::InvalidModulus {
                n: self.n as i128,
                max: MAX_N,
            });
        }
        Ok(())
    }

    /// Modulus of the index ring, Z_{2n} (Z when n = 0)
    pub fn ring_modulus(&self) -> Modulus {
        // n <= MAX_N, so 2n fits
        Modulus::new(2 * self.n)
    }

    /// True for the infinite group Q_0
    pub fn is_degenerate(&self) -> bool {
        self.n == 0
    }

    /// Group order 4n, or `None` when the group is infinite
    pub fn order(&self) -> Option<u64> {
        if self.is_degenerate() {
            None
        } else {
            Some(4 * self.n)
        }
    }
}

impl Default for GroupParams {
    fn default() -> Self {
        Self::q8()
    }
}
