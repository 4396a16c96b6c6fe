//! Error types for group construction and queries.
//!
//! Every condition here is local and recoverable; nothing in the crate does
//! I/O, so callers get a plain enum back.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    #[error("Invalid group parameter n = {n}: must satisfy 0 <= n <= {max}")]
    InvalidModulus { n: i128, max: u64 },

    #[error("Cannot enumerate the infinite group Q_0")]
    UnboundedEnumeration,

    #[error("Element {element} has infinite order")]
    InfiniteOrder { element: String },

    #[error("Dihedral isomorphism is only defined for n = 0, got n = {n}")]
    NotDegenerate { n: u64 },

    #[error("Elements belong to different groups: {left} vs {right}")]
    ModulusMismatch { left: String, right: String },
}

/// Result type for group operations
pub type Result<T> = std::result::Result<T, GroupError>;
