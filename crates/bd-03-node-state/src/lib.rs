//! # Node State Subsystem (bd-03)
//!
//! Owns everything a node knows about the registry: the name index, the
//! pool of submitted but unapplied transactions, and the chain log.
//!
//! ## Lock Scopes
//!
//! | Scope | Lock | Guards | Taken by |
//! |-------|------|--------|----------|
//! | Application gate | `Mutex<()>` | serial block application | `apply_block` only |
//! | Index+Pool | `Mutex<RegistryState>` | name index, transaction pool | apply, submit, reads |
//! | Chain | `RwLock<C: ChainLog>` | chain log | apply (append), reads |
//!
//! The gate is always taken first. Index+Pool and Chain are never held at
//! the same time, and nothing is sent to a peer while either is held.
//!
//! ## Block Application
//!
//! ```text
//! apply_block(block)
//!   ├─ gate.lock()
//!   ├─ tip  = chain.read().latest_block()          (released)
//!   ├─ consensus.check_block(block, tip)            reject → no mutation
//!   ├─ registry.lock(): mutate index, purge pool    (released)
//!   └─ chain.write().add_block(block)               (released)
//! ```

pub mod adapters;
pub mod domain;
pub mod metrics;
pub mod ports;
pub mod service;

pub use adapters::InMemoryChain;
pub use domain::{
    ApplySummary, ChainError, NodeError, NodeResult, NodeStateConfig, Registry, TransactionPool,
};
pub use ports::{ChainLog, NodeStateApi};
pub use service::NodeState;
