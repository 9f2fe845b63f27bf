//! # Consensus Gate Subsystem (bd-02)
//!
//! Decides whether a block may extend the local chain. The gate only
//! validates; applying an accepted block is the node state's job.
//!
//! ## Slot Leadership
//!
//! Time is cut into slots of `slot_interval_secs`, grouped into epochs of
//! `slots_per_epoch` slots. Exactly one authority leads each epoch, as named
//! by a [`SlotLeaderOracle`]. A block belongs to the epoch of its own
//! timestamp:
//!
//! ```text
//! epoch = (block.timestamp - initial_timestamp) / (slot_interval_secs * slots_per_epoch)
//! ```
//!
//! ## Validation Paths
//!
//! | Path | Checks |
//! |------|--------|
//! | Genesis (index 0) | chain empty, zero `prev_hash`, producer registered and leading |
//! | Chained | tip present, `index = tip + 1`, `prev_hash = tip.hash()`, producer leading, timestamp after tip |
//!
//! Every rejection carries a [`ConsensusError`] naming the failed check.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::RoundRobinSchedule;
pub use domain::{
    validate_block, validate_genesis, AuthorityRegistry, ConsensusError, ConsensusResult, Epoch,
    SlotConfig,
};
pub use ports::{ConsensusGateApi, SlotLeaderOracle};
pub use service::ConsensusGate;
