//! Generalized quaternion groups Q_{4n}
//!
//! This crate implements the dicyclic group of order 4n as a plain value type:
//!
//! - Elements `a(i)` and `xa(i)` indexed by Z_{2n}
//! - Multiplication, inverses and closed-form powers
//! - Element orders, cardinality and the group exponent
//! - The isomorphism between the infinite group Q_0 and the infinite dihedral group
//!
//! With no proof engine behind it, the group laws are checked by exhaustive
//! and property-based tests.
//!
//! # Example
//!
//! ```
//! use quaternion_group::{Order, QuaternionGroup};
//!
//! let g = QuaternionGroup::new(3).unwrap();
//! assert_eq!(g.cardinality().unwrap(), 12);
//! assert_eq!(g.order_of(&g.a(1)), Order::Finite(6));
//! assert_eq!(g.xa(1).inverse(), g.xa(4));
//!
//! let q0 = QuaternionGroup::new(0).unwrap();
//! assert_eq!(q0.order_of(&q0.a(1)), Order::Infinite);
//! assert!(q0.cardinality().is_err());
//! ```

pub mod dihedral;
pub mod error;
pub mod group;
pub mod math;
pub mod params;

pub use dihedral::{from_dihedral_infinite, to_dihedral_infinite, DihedralElement, DihedralGroup};
pub use error::{GroupError, Result};
pub use group::{
    check_axioms, exponent, order_by_search, order_of, ElementKind, Exponent, Group, Order,
    QuaternionElement, QuaternionGroup,
};
pub use math::{Modulus, ZMod};
pub use params::GroupParams;
