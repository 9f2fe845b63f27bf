//! Ports for the node state
//!
//! - **Inbound**: `NodeStateApi`, driven by the runtime and the sync handlers
//! - **Outbound**: `ChainLog`, the append-only block store

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
