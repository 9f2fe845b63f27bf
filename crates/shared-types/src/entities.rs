//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `AuthorityId`, `PeerAddress`
//! - **Registry**: `Transaction`, `TransactionKind`
//! - **Chain**: `Block`

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use std::fmt;

// =============================================================================
// CLUSTER A: IDENTITY
// =============================================================================

/// A 32-byte hash.
pub type Hash = [u8; 32];

/// The all-zero hash. Used as the predecessor of the genesis block.
pub const ZERO_HASH: Hash = [0u8; 32];

/// Identity of a block-producing authority (its registry public key).
pub type AuthorityId = [u8; 32];

/// Transaction identifier, unique within the pending pool.
pub type TransactionId = u64;

/// Network address of a peer node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeerAddress(pub String);

impl PeerAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short hex form of an identity for log lines.
pub fn short_id(id: &[u8]) -> String {
    hex::encode(&id[..id.len().min(4)])
}

// =============================================================================
// CLUSTER B: REGISTRY
// =============================================================================

/// What a transaction does to its domain name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Claim a new name.
    Register,
    /// Replace the resolution data of a name.
    Update,
    /// Release a name.
    Revoke,
}

impl TransactionKind {
    /// Stable one-byte tag used in hashing.
    pub fn code(self) -> u8 {
        match self {
            Self::Register => 0,
            Self::Update => 1,
            Self::Revoke => 2,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "REGISTER"),
            Self::Update => write!(f, "UPDATE"),
            Self::Revoke => write!(f, "REVOKE"),
        }
    }
}

/// A name-registry transaction.
///
/// Well-formedness and the owner's signature are checked before a transaction
/// reaches a node; here both are carried as-is.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Pool-unique identifier.
    pub tid: TransactionId,
    /// Registry operation.
    pub kind: TransactionKind,
    /// Plain domain name, e.g. `alice.bdns`.
    pub domain_name: String,
    /// Resolution payload (address record). Empty for revocations.
    pub resolution: String,
    /// Owner public key.
    pub owner: AuthorityId,
    /// Unix timestamp (seconds) at which the owner created the transaction.
    pub timestamp: u64,
    /// Owner signature over the transaction body.
    #[serde_as(as = "Bytes")]
    pub signature: Vec<u8>,
}

impl Transaction {
    /// Builds an unsigned transaction.
    pub fn new(
        tid: TransactionId,
        kind: TransactionKind,
        domain_name: impl Into<String>,
        resolution: impl Into<String>,
        owner: AuthorityId,
        timestamp: u64,
    ) -> Self {
        Self {
            tid,
            kind,
            domain_name: domain_name.into(),
            resolution: resolution.into(),
            owner,
            timestamp,
            signature: Vec::new(),
        }
    }

    pub fn register(
        tid: TransactionId,
        domain_name: impl Into<String>,
        resolution: impl Into<String>,
        owner: AuthorityId,
        timestamp: u64,
    ) -> Self {
        Self::new(
            tid,
            TransactionKind::Register,
            domain_name,
            resolution,
            owner,
            timestamp,
        )
    }

    pub fn update(
        tid: TransactionId,
        domain_name: impl Into<String>,
        resolution: impl Into<String>,
        owner: AuthorityId,
        timestamp: u64,
    ) -> Self {
        Self::new(
            tid,
            TransactionKind::Update,
            domain_name,
            resolution,
            owner,
            timestamp,
        )
    }

    pub fn revoke(
        tid: TransactionId,
        domain_name: impl Into<String>,
        owner: AuthorityId,
        timestamp: u64,
    ) -> Self {
        Self::new(tid, TransactionKind::Revoke, domain_name, "", owner, timestamp)
    }

    /// SHA3-256 over every field. Strings and the signature are
    /// length-prefixed so adjacent fields cannot run together.
    pub fn hash(&self) -> Hash {
        use sha3::{Digest, Sha3_256};
        let mut hasher = Sha3_256::new();
        hasher.update(self.tid.to_le_bytes());
        hasher.update([self.kind.code()]);
        for field in [
            self.domain_name.as_bytes(),
            self.resolution.as_bytes(),
            self.signature.as_slice(),
        ] {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field);
        }
        hasher.update(self.owner);
        hasher.update(self.timestamp.to_le_bytes());
        hasher.finalize().into()
    }
}

// =============================================================================
// CLUSTER C: THE CHAIN
// =============================================================================

/// A block of registry transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Sequence number. Genesis is 0.
    pub index: u64,
    /// Unix timestamp (seconds). Determines the block's epoch.
    pub timestamp: u64,
    /// Authority that produced the block.
    pub producer: AuthorityId,
    /// Hash of the predecessor block, `ZERO_HASH` for genesis.
    pub prev_hash: Hash,
    /// Transactions in application order.
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Build a genesis block (index 0, zero predecessor).
    pub fn genesis(timestamp: u64, producer: AuthorityId, transactions: Vec<Transaction>) -> Self {
        Self {
            index: 0,
            timestamp,
            producer,
            prev_hash: ZERO_HASH,
            transactions,
        }
    }

    /// Build the block that extends `parent`.
    pub fn child_of(
        parent: &Block,
        timestamp: u64,
        producer: AuthorityId,
        transactions: Vec<Transaction>,
    ) -> Self {
        Self {
            index: parent.index + 1,
            timestamp,
            producer,
            prev_hash: parent.hash(),
            transactions,
        }
    }

    /// Compute the hash of this block.
    ///
    /// Covers the header fields and the full content of every transaction,
    /// in order.
    pub fn hash(&self) -> Hash {
        use sha3::{Digest, Sha3_256};
        let mut hasher = Sha3_256::new();
        hasher.update(self.index.to_le_bytes());
        hasher.update(self.timestamp.to_le_bytes());
        hasher.update(self.producer);
        hasher.update(self.prev_hash);
        hasher.update((self.transactions.len() as u64).to_le_bytes());
        for tx in &self.transactions {
            hasher.update(tx.hash());
        }
        hasher.finalize().into()
    }

    /// Check if this is a genesis block
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// Identifiers of all transactions in the block, in block order.
    pub fn transaction_ids(&self) -> impl Iterator<Item = TransactionId> + '_ {
        self.transactions.iter().map(|tx| tx.tid)
    }
}
