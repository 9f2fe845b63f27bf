//! Consensus gate service
//!
//! Ties slot arithmetic, the leader oracle and the validators together in
//! the order every block goes through: derive the epoch from the block's own
//! timestamp, look up that epoch's leader, then take the genesis or the
//! chained path.

use crate::domain::{
    validate_block, validate_genesis, AuthorityRegistry, ConsensusError, ConsensusResult, Epoch,
    SlotConfig,
};
use crate::ports::{ConsensusGateApi, SlotLeaderOracle};
use shared_types::{AuthorityId, Block};
use std::sync::Arc;
use tracing::trace;

/// Block admission for one node.
#[derive(Clone)]
pub struct ConsensusGate {
    slots: SlotConfig,
    authorities: AuthorityRegistry,
    oracle: Arc<dyn SlotLeaderOracle>,
}

impl ConsensusGate {
    pub fn new(
        slots: SlotConfig,
        authorities: AuthorityRegistry,
        oracle: Arc<dyn SlotLeaderOracle>,
    ) -> ConsensusResult<Self> {
        slots.validate()?;
        Ok(Self {
            slots,
            authorities,
            oracle,
        })
    }

    pub fn slots(&self) -> &SlotConfig {
        &self.slots
    }

    pub fn authorities(&self) -> &AuthorityRegistry {
        &self.authorities
    }
}

impl ConsensusGateApi for ConsensusGate {
    fn epoch_of(&self, timestamp: u64) -> ConsensusResult<Epoch> {
        self.slots.epoch_of(timestamp)
    }

    fn expected_leader(&self, epoch: Epoch) -> ConsensusResult<AuthorityId> {
        self.oracle
            .slot_leader(epoch)
            .ok_or(ConsensusError::NoSlotLeader { epoch })
    }

    fn check_block(&self, block: &Block, tip: Option<&Block>) -> ConsensusResult<Epoch> {
        let epoch = self.epoch_of(block.timestamp)?;
        let leader = self.expected_leader(epoch)?;
        trace!(
            "[bd-02] Checking block {} (epoch {}) against tip {:?}",
            block.index,
            epoch,
            tip.map(|t| t.index)
        );

        match (block.is_genesis(), tip) {
            (true, None) => validate_genesis(block, &self.authorities, &leader)?,
            (true, Some(_)) => return Err(ConsensusError::GenesisOnNonEmptyChain),
            (false, Some(tip)) => validate_block(block, tip, &leader)?,
            (false, None) => return Err(ConsensusError::MissingTip { index: block.index }),
        }
        Ok(epoch)
    }
}

impl std::fmt::Debug for ConsensusGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsensusGate")
            .field("slots", &self.slots)
            .field("authorities", &self.authorities.len())
            .finish_non_exhaustive()
    }
}
