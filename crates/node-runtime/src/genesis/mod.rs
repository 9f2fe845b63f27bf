//! # Genesis Module
//!
//! Devnet authority identities and the genesis block.
//!
//! The genesis block has index 0, a zero `prev_hash`, the configured
//! `initial_timestamp`, and is produced by the leader of epoch 0. It may
//! carry REGISTER transactions for names that exist from the start.

pub mod builder;

pub use builder::{devnet_authorities, GenesisBuilder, GenesisError};
