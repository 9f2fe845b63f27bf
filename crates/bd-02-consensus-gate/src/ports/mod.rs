//! Ports for the consensus gate
//!
//! - **Inbound**: `ConsensusGateApi`, driven by the node state on every block
//! - **Outbound**: `SlotLeaderOracle`, the leader schedule

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
