//! Error types for peer sync

use shared_types::PeerAddress;
use thiserror::Error;

/// Failure to hand a message to a peer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Unknown peer: {0}")]
    UnknownPeer(PeerAddress),

    #[error("Peer disconnected: {0}")]
    Disconnected(PeerAddress),

    #[error("Message codec error: {0}")]
    Codec(String),
}
