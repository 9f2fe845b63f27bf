//! # Wiring
//!
//! Assembles a devnet: the shared network, one node per authority, the
//! genesis block and the background tasks.

pub mod devnet;

pub use devnet::Devnet;
