//! Arithmetic substrate for the quaternion and dihedral groups.
//!
//! Both groups index their elements by a cyclic ring: Z_{2n} for Q_{4n} and
//! Z_n for D_n. A parameter of zero turns the ring into Z and the groups into
//! their infinite versions.
//!
//! # Example
//!
//! ```
//! use quaternion_group::math::{Modulus, ZMod};
//!
//! let ring = Modulus::new(8);
//! let x = ZMod::from_nat(6, ring);
//! assert_eq!(x.additive_order(), Some(4));
//! ```

pub mod modular;

pub use modular::{Modulus, ZMod};
