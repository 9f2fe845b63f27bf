//! Slot and epoch arithmetic

use super::error::{ConsensusError, ConsensusResult};
use serde::{Deserialize, Serialize};

/// Epoch number.
pub type Epoch = u64;

/// Slot timing shared by every node of a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Unix time (seconds) at which slot 0 starts.
    pub initial_timestamp: u64,
    /// Length of a slot in seconds.
    pub slot_interval_secs: u64,
    /// Slots per epoch.
    pub slots_per_epoch: u64,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            initial_timestamp: 0,
            slot_interval_secs: 5,
            slots_per_epoch: 4,
        }
    }
}

impl SlotConfig {
    /// One-second slots, two per epoch, starting at zero.
    pub fn for_testing() -> Self {
        Self {
            initial_timestamp: 0,
            slot_interval_secs: 1,
            slots_per_epoch: 2,
        }
    }

    pub fn validate(&self) -> ConsensusResult<()> {
        if self.slot_interval_secs == 0 {
            return Err(ConsensusError::InvalidSlotConfig("slot_interval_secs is zero"));
        }
        if self.slots_per_epoch == 0 {
            return Err(ConsensusError::InvalidSlotConfig("slots_per_epoch is zero"));
        }
        Ok(())
    }

    /// Length of an epoch in seconds.
    pub fn epoch_length_secs(&self) -> u64 {
        self.slot_interval_secs.saturating_mul(self.slots_per_epoch)
    }

    /// Epoch containing `timestamp`.
    pub fn epoch_of(&self, timestamp: u64) -> ConsensusResult<Epoch> {
        let elapsed = timestamp.checked_sub(self.initial_timestamp).ok_or(
            ConsensusError::TimestampBeforeInitial {
                timestamp,
                initial: self.initial_timestamp,
            },
        )?;
        match self.epoch_length_secs() {
            0 => Err(ConsensusError::InvalidSlotConfig("epoch length is zero")),
            length => Ok(elapsed / length),
        }
    }

    /// Slot number containing `timestamp`, counted from slot 0.
    pub fn slot_of(&self, timestamp: u64) -> ConsensusResult<u64> {
        let elapsed = timestamp.checked_sub(self.initial_timestamp).ok_or(
            ConsensusError::TimestampBeforeInitial {
                timestamp,
                initial: self.initial_timestamp,
            },
        )?;
        match self.slot_interval_secs {
            0 => Err(ConsensusError::InvalidSlotConfig("slot_interval_secs is zero")),
            interval => Ok(elapsed / interval),
        }
    }
}
