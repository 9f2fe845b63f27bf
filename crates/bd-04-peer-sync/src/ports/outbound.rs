//! Driven ports (Outbound dependencies)

use crate::domain::{PeerMessage, TransportError};
use shared_types::{Block, PeerAddress, Transaction};

/// Read-only view of the local node.
pub trait ChainReader: Send + Sync {
    /// Index of the tip, `None` for an empty chain.
    fn tip_height(&self) -> Option<u64>;

    fn latest_block(&self) -> Option<Block>;

    /// Every block with index `>= height`.
    fn blocks_from(&self, height: u64) -> Vec<Block>;

    /// Every pending transaction.
    fn pending_transactions(&self) -> Vec<Transaction>;
}

/// Outbound network link. Fire-and-forget: `Ok` means the message was
/// handed off, not that the peer processed it.
pub trait PeerTransport: Send + Sync {
    fn direct_message(
        &self,
        message: PeerMessage,
        destination: &PeerAddress,
    ) -> Result<(), TransportError>;
}
