//! Adapters layer

mod memory_chain;

pub use memory_chain::*;
