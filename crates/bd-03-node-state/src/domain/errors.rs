//! Error types for the node state

use bd_01_name_index::IndexError;
use bd_02_consensus_gate::ConsensusError;
use thiserror::Error;

/// Chain log failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    #[error("Non-contiguous block: expected index {expected}, got {actual}")]
    NonContiguous { expected: u64, actual: u64 },
}

/// Block application and query failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The consensus gate refused the block. Nothing was mutated.
    #[error("Block {index} rejected: {source}")]
    Rejected {
        index: u64,
        #[source]
        source: ConsensusError,
    },

    /// The index failed its structural check after a mutation.
    #[error("Name index corrupted: {0}")]
    IndexCorrupted(#[from] IndexError),

    /// The node refuses blocks after detecting corruption.
    #[error("Node is quarantined after index corruption")]
    Quarantined,

    #[error("Chain log error: {0}")]
    Chain(#[from] ChainError),
}

impl NodeError {
    /// Short label, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Rejected { source, .. } => source.reason(),
            Self::IndexCorrupted(_) => "index_corrupted",
            Self::Quarantined => "quarantined",
            Self::Chain(_) => "chain",
        }
    }
}

/// Result type for node state operations
pub type NodeResult<T> = Result<T, NodeError>;
