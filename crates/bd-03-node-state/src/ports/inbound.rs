//! Driving ports (Inbound API)

use crate::domain::{ApplySummary, NodeResult};
use bd_01_name_index::{Digest, IndexRecord};
use shared_types::{Block, Transaction};

/// Primary node state API.
pub trait NodeStateApi: Send + Sync {
    /// Validate and apply a block.
    ///
    /// ## Returns
    ///
    /// - `Ok(ApplySummary)`: the block is on the chain and in the index
    /// - `Err(NodeError::Rejected)`: refused by consensus, nothing changed
    /// - `Err(NodeError::Quarantined)`: the node no longer applies blocks
    fn apply_block(&self, block: Block) -> NodeResult<ApplySummary>;

    /// Add a transaction to the pending pool, overwriting by id.
    fn submit_transaction(&self, tx: Transaction);

    /// Current record for a domain name.
    fn resolve(&self, domain_name: &str) -> Option<IndexRecord>;

    /// Root digest of the name index.
    fn index_digest(&self) -> Digest;

    /// The chain tip, cloned.
    fn latest_block(&self) -> Option<Block>;

    /// Every block with index `>= height`.
    fn blocks_from(&self, height: u64) -> Vec<Block>;

    /// Up to `limit` pending transactions, ascending by id.
    fn pending_transactions(&self, limit: usize) -> Vec<Transaction>;
}
