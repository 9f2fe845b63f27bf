//! # Value Objects
//!
//! Keys, stored records and the digest sentinel.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use shared_types::{Transaction, TransactionId, TransactionKind};
use std::fmt;

/// A 32-byte tree digest.
pub type Digest = [u8; 32];

/// Digest of an empty subtree (all zeros).
pub const SENTINEL_DIGEST: Digest = [0u8; 32];

/// Index key: the lowercase hex SHA-256 of a domain name.
///
/// Keys compare by byte order of the hex string, which matches byte order of
/// the underlying hash.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    /// Width of a hashed key in characters.
    pub const WIDTH: usize = 64;

    /// Hash a domain name into its index key.
    pub fn from_domain(domain_name: &str) -> Self {
        let hash = Sha256::digest(domain_name.as_bytes());
        Self(hex::encode(hash))
    }

    /// Use an arbitrary string as a key.
    ///
    /// The tree only relies on ordering, so diagnostics and tests may key it
    /// directly.
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The value stored for a name: the transaction that last established or
/// updated its resolution data, and the block that carried it.
///
/// Records are replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    pub transaction: Transaction,
    /// Index of the block the transaction was applied from.
    pub block_index: u64,
}

impl IndexRecord {
    pub fn new(transaction: Transaction, block_index: u64) -> Self {
        Self {
            transaction,
            block_index,
        }
    }

    pub fn tid(&self) -> TransactionId {
        self.transaction.tid
    }

    pub fn domain_name(&self) -> &str {
        &self.transaction.domain_name
    }

    pub fn kind(&self) -> TransactionKind {
        self.transaction.kind
    }

    pub fn resolution(&self) -> &str {
        &self.transaction.resolution
    }

    pub fn timestamp(&self) -> u64 {
        self.transaction.timestamp
    }
}

/// Shape summary returned by a successful `NameIndex::verify`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of names stored.
    pub len: usize,
    /// Height of the root (0 for an empty index).
    pub height: u32,
}
