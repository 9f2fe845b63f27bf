//! Ports for peer sync
//!
//! - **Inbound**: `SyncApi`, one handler per request kind
//! - **Outbound**: `ChainReader` (local state) and `PeerTransport` (network)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
