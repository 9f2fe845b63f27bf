//! # Node Runtime Library
//!
//! Exposes the runtime's modules for the binary and for tests.
//!
//! - `container/` - configuration and per-node subsystem wiring
//! - `adapters/` - the in-process channel transport
//! - `genesis/` - devnet identities and the genesis block
//! - `handlers/` - inbound dispatch and block production
//! - `wiring/` - devnet assembly and lifecycle

pub mod adapters;
pub mod container;
pub mod genesis;
pub mod handlers;
pub mod wiring;

pub use container::{ConfigError, DevnetConfig, NodeConfig};
pub use wiring::Devnet;
