//! # Domain Errors
//!
//! Lookups and removals of absent names are not errors; they return `None`.
//! The only failures this crate reports are structural invariant violations,
//! which mean the tree is corrupt.

use super::value_objects::NameKey;
use thiserror::Error;

/// Structural invariant violations detected by `NameIndex::verify`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A key is out of order relative to an ancestor, or duplicated.
    #[error("Ordering violated at key {key}")]
    OrderViolation { key: NameKey },

    /// A node's cached height does not match its subtrees.
    #[error("Height mismatch at key {key}: stored {stored}, actual {actual}")]
    HeightMismatch {
        key: NameKey,
        stored: u32,
        actual: u32,
    },

    /// A node's balance factor is outside [-1, 1].
    #[error("Unbalanced node at key {key}: balance factor {balance}")]
    Unbalanced { key: NameKey, balance: i64 },

    /// The tracked length disagrees with the number of reachable nodes.
    #[error("Length mismatch: tracked {tracked}, reachable {reachable}")]
    LengthMismatch { tracked: usize, reachable: usize },
}

/// Result type for index verification.
pub type IndexResult<T> = Result<T, IndexError>;
