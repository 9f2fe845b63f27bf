//! Driving ports (Inbound API)

use crate::domain::{ConsensusResult, Epoch};
use shared_types::{AuthorityId, Block};

/// Block admission API.
pub trait ConsensusGateApi: Send + Sync {
    /// Epoch of a unix timestamp.
    fn epoch_of(&self, timestamp: u64) -> ConsensusResult<Epoch>;

    /// Leader of `epoch`.
    fn expected_leader(&self, epoch: Epoch) -> ConsensusResult<AuthorityId>;

    /// Decide whether `block` may extend a chain whose tip is `tip`
    /// (`None` for an empty chain).
    ///
    /// Returns the block's epoch on success.
    fn check_block(&self, block: &Block, tip: Option<&Block>) -> ConsensusResult<Epoch>;
}
