//! # Genesis Block Builder

use crate::container::GenesisRecord;
use bd_02_consensus_gate::{SlotConfig, SlotLeaderOracle};
use sha3::{Digest, Sha3_256};
use shared_types::{AuthorityId, Block, Transaction};
use thiserror::Error;

/// Genesis block creation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenesisError {
    /// The leader schedule is empty.
    #[error("No leader for epoch 0")]
    NoLeader,

    /// A genesis record names no domain.
    #[error("Genesis record {0} has an empty domain name")]
    EmptyDomain(usize),
}

/// Deterministic authority identities for an `n`-node devnet.
pub fn devnet_authorities(n: usize) -> Vec<AuthorityId> {
    (0..n)
        .map(|i| {
            let mut hasher = Sha3_256::new();
            hasher.update(b"bdns-devnet-authority");
            hasher.update((i as u64).to_be_bytes());
            hasher.finalize().into()
        })
        .collect()
}

/// Builds the genesis block for a slot configuration.
#[derive(Debug, Clone)]
pub struct GenesisBuilder {
    slots: SlotConfig,
    records: Vec<GenesisRecord>,
}

impl GenesisBuilder {
    pub fn new(slots: SlotConfig) -> Self {
        Self {
            slots,
            records: Vec::new(),
        }
    }

    pub fn with_records(mut self, records: impl IntoIterator<Item = GenesisRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Build the genesis block produced by the epoch-0 leader.
    ///
    /// Record `i` becomes a REGISTER transaction with tid `i`, owned by the
    /// leader.
    pub fn build(&self, oracle: &dyn SlotLeaderOracle) -> Result<Block, GenesisError> {
        let leader = oracle.slot_leader(0).ok_or(GenesisError::NoLeader)?;
        let timestamp = self.slots.initial_timestamp;

        let transactions = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                if record.domain_name.is_empty() {
                    return Err(GenesisError::EmptyDomain(i));
                }
                Ok(Transaction::register(
                    i as u64,
                    record.domain_name.clone(),
                    record.resolution.clone(),
                    leader,
                    timestamp,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Block::genesis(timestamp, leader, transactions))
    }
}
