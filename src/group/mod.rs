//! The generalized quaternion group Q_{4n}.
//!
//! - [`element`]: the `a(i)` / `xa(i)` representation and multiplication
//! - [`order`]: element orders and the group exponent
//! - [`quaternion`]: the group as a whole (enumeration, cardinality, sampling)
//! - [`traits`]: a small `Group` trait and a sampled axiom checker

pub mod element;
pub mod order;
pub mod quaternion;
pub mod traits;

pub use element::{ElementKind, QuaternionElement};
pub use order::{exponent, order_by_search, order_of, Exponent, Order};
pub use quaternion::QuaternionGroup;
pub use traits::{check_axioms, Axiom, AxiomViolation, Group};
