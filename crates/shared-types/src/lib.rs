//! # Shared Types Crate
//!
//! Chain entities shared by every BDNS subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Transaction` and `Block` are defined once here
//!   and consumed by the index, the consensus gate, node state and peer sync.
//! - **Opaque Crypto**: owner keys and signatures are carried as bytes; no
//!   subsystem in this workspace verifies them.

pub mod entities;

pub use entities::*;
