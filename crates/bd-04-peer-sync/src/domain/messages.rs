//! Peer wire messages

use serde::{Deserialize, Serialize};
use shared_types::{Block, Transaction};
use std::fmt;

/// Every message a node exchanges with its peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeerMessage {
    /// Announce new state; the receiver asks for blocks.
    Inv,
    /// Ask for the receiver's pending transactions.
    GetData,
    /// Ask for blocks; `height` is the requester's tip.
    GetBlock { height: u64 },
    Transaction(Transaction),
    Block(Block),
    /// Ask for the receiver's latest block.
    ProofRequest,
}

/// Discriminant of a [`PeerMessage`], for logging and routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Inv,
    GetData,
    GetBlock,
    Transaction,
    Block,
    ProofRequest,
}

impl PeerMessage {
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Inv => MessageKind::Inv,
            Self::GetData => MessageKind::GetData,
            Self::GetBlock { .. } => MessageKind::GetBlock,
            Self::Transaction(_) => MessageKind::Transaction,
            Self::Block(_) => MessageKind::Block,
            Self::ProofRequest => MessageKind::ProofRequest,
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inv => "INV",
            Self::GetData => "GETDATA",
            Self::GetBlock => "GETBLOCK",
            Self::Transaction => "TRANSACTION",
            Self::Block => "BLOCK",
            Self::ProofRequest => "PROOF",
        };
        f.write_str(name)
    }
}
