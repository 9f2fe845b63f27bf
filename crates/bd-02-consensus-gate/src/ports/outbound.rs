//! Driven ports (Outbound dependencies)

use crate::domain::Epoch;
use shared_types::AuthorityId;

/// Leader schedule.
///
/// Must be pure and deterministic: every node asking about the same epoch
/// gets the same answer.
pub trait SlotLeaderOracle: Send + Sync {
    /// The authority entitled to produce blocks during `epoch`, or `None`
    /// when the schedule has no authorities.
    fn slot_leader(&self, epoch: Epoch) -> Option<AuthorityId>;
}
