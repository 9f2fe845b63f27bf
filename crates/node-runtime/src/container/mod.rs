//! # Node Container
//!
//! Configuration and the per-node wiring of subsystems.

pub mod config;
pub mod node;

pub use config::{ConfigError, DevnetConfig, GenesisRecord, NodeConfig};
pub use node::DevnetNode;
