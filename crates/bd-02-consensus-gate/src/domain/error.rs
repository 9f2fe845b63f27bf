//! Error types for the consensus gate

use shared_types::{short_id, AuthorityId, Hash};

/// Reasons a block is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsensusError {
    #[error("Invalid block index: expected {expected}, got {actual}")]
    InvalidIndex { expected: u64, actual: u64 },

    #[error("Previous hash mismatch: expected {expected}, got {actual}")]
    PrevHashMismatch { expected: String, actual: String },

    #[error("Genesis block must have a zero previous hash")]
    GenesisWithParent,

    #[error("Genesis block offered to a non-empty chain")]
    GenesisOnNonEmptyChain,

    #[error("No local tip to extend with block {index}")]
    MissingTip { index: u64 },

    #[error("Producer {actual} is not the slot leader {expected}")]
    NotSlotLeader { expected: String, actual: String },

    #[error("Producer {0} is not a registered authority")]
    UnknownAuthority(String),

    #[error("No slot leader for epoch {epoch}")]
    NoSlotLeader { epoch: u64 },

    #[error("Invalid timestamp: block {block} <= parent {parent}")]
    InvalidTimestamp { block: u64, parent: u64 },

    #[error("Timestamp {timestamp} precedes the initial timestamp {initial}")]
    TimestampBeforeInitial { timestamp: u64, initial: u64 },

    #[error("Invalid slot configuration: {0}")]
    InvalidSlotConfig(&'static str),
}

impl ConsensusError {
    /// Stable short label, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidIndex { .. } => "invalid_index",
            Self::PrevHashMismatch { .. } => "prev_hash_mismatch",
            Self::GenesisWithParent => "genesis_with_parent",
            Self::GenesisOnNonEmptyChain => "genesis_on_non_empty_chain",
            Self::MissingTip { .. } => "missing_tip",
            Self::NotSlotLeader { .. } => "not_slot_leader",
            Self::UnknownAuthority(_) => "unknown_authority",
            Self::NoSlotLeader { .. } => "no_slot_leader",
            Self::InvalidTimestamp { .. } => "invalid_timestamp",
            Self::TimestampBeforeInitial { .. } => "timestamp_before_initial",
            Self::InvalidSlotConfig(_) => "invalid_slot_config",
        }
    }

    pub(crate) fn not_leader(expected: &AuthorityId, actual: &AuthorityId) -> Self {
        Self::NotSlotLeader {
            expected: short_id(expected),
            actual: short_id(actual),
        }
    }

    pub(crate) fn prev_hash_mismatch(expected: &Hash, actual: &Hash) -> Self {
        Self::PrevHashMismatch {
            expected: short_id(expected),
            actual: short_id(actual),
        }
    }
}

/// Result type for consensus operations
pub type ConsensusResult<T> = Result<T, ConsensusError>;
