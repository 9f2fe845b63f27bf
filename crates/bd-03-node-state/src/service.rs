//! # Node State Service
//!
//! Block application and read access over the three lock scopes.

use crate::adapters::InMemoryChain;
use crate::domain::{ApplySummary, NodeError, NodeResult, NodeStateConfig, Registry};
use crate::metrics;
use crate::ports::{ChainLog, NodeStateApi};
use bd_01_name_index::{Digest, IndexRecord, IndexResult, IndexStats, NameIndex, NameIndexApi};
use bd_02_consensus_gate::ConsensusGateApi;
use parking_lot::{Mutex, RwLock};
use shared_types::{short_id, Block, Transaction};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A node's registry, pool and chain.
pub struct NodeState<C = InMemoryChain, I = NameIndex> {
    config: NodeStateConfig,
    consensus: Arc<dyn ConsensusGateApi>,
    /// Serializes `apply_block`. Always taken before any other lock.
    apply_gate: Mutex<()>,
    registry: Registry<I>,
    chain: RwLock<C>,
    quarantined: AtomicBool,
}

impl NodeState {
    /// Empty in-memory node.
    pub fn new(config: NodeStateConfig, consensus: Arc<dyn ConsensusGateApi>) -> Self {
        Self::with_parts(config, consensus, InMemoryChain::new(), Registry::new())
    }

    /// Ascending listing of every indexed key, for diagnostics.
    pub fn describe_index(&self) -> String {
        self.registry.describe_index()
    }
}

impl<C: ChainLog, I: NameIndexApi> NodeState<C, I> {
    pub fn with_parts(
        config: NodeStateConfig,
        consensus: Arc<dyn ConsensusGateApi>,
        chain: C,
        registry: Registry<I>,
    ) -> Self {
        Self {
            config,
            consensus,
            apply_gate: Mutex::new(()),
            registry,
            chain: RwLock::new(chain),
            quarantined: AtomicBool::new(false),
        }
    }

    pub fn consensus(&self) -> &dyn ConsensusGateApi {
        self.consensus.as_ref()
    }

    pub fn config(&self) -> &NodeStateConfig {
        &self.config
    }

    /// Validate `block` against the current tip and apply it.
    ///
    /// A refused block leaves index, pool and chain untouched.
    pub fn apply_block(&self, block: Block) -> NodeResult<ApplySummary> {
        let _gate = self.apply_gate.lock();

        if self.is_quarantined() {
            metrics::record_block_rejected(NodeError::Quarantined.reason());
            return Err(NodeError::Quarantined);
        }

        let tip = self.chain.read().latest_block().cloned();

        let epoch = match self.consensus.check_block(&block, tip.as_ref()) {
            Ok(epoch) => epoch,
            Err(source) => {
                warn!(
                    "[bd-03] Rejected block {} from {}: {}",
                    block.index,
                    short_id(&block.producer),
                    source
                );
                let err = NodeError::Rejected {
                    index: block.index,
                    source,
                };
                metrics::record_block_rejected(err.reason());
                return Err(err);
            }
        };

        let summary = match self
            .registry
            .apply_block(&block, self.config.verify_index_on_apply)
        {
            Ok(summary) => summary,
            Err(violation) => {
                error!(
                    "[bd-03] Index invariant violated applying block {}: {}; quarantining node",
                    block.index, violation
                );
                self.quarantined.store(true, Ordering::SeqCst);
                let err = NodeError::IndexCorrupted(violation);
                metrics::record_block_rejected(err.reason());
                return Err(err);
            }
        };

        let index = block.index;
        let tx_count = block.transactions.len();
        let appended = self.chain.write().add_block(block);
        if let Err(e) = appended {
            error!(
                "[bd-03] Chain refused validated block {}: {}; quarantining node",
                index, e
            );
            self.quarantined.store(true, Ordering::SeqCst);
            let err = NodeError::from(e);
            metrics::record_block_rejected(err.reason());
            return Err(err);
        }

        metrics::record_block_applied(index, self.registry.name_count());
        info!(
            "[bd-03] Applied block {} (epoch {}, {} txs, {} purged from pool)",
            index, epoch, tx_count, summary.purged
        );
        Ok(summary)
    }

    /// Add a transaction to the pending pool.
    pub fn submit_transaction(&self, tx: Transaction) {
        let tid = tx.tid;
        if self.registry.submit(tx).is_some() {
            debug!("[bd-03] Replaced pending transaction {}", tid);
        }
        metrics::record_transaction_submitted();
    }

    pub fn resolve(&self, domain_name: &str) -> Option<IndexRecord> {
        self.registry.resolve(domain_name)
    }

    pub fn index_digest(&self) -> Digest {
        self.registry.digest()
    }

    /// Full structural check of the name index.
    pub fn verify_index(&self) -> IndexResult<IndexStats> {
        self.registry.verify()
    }

    pub fn latest_block(&self) -> Option<Block> {
        self.chain.read().latest_block().cloned()
    }

    /// Index of the tip, `None` for an empty chain.
    pub fn tip_height(&self) -> Option<u64> {
        self.chain.read().latest_block().map(|b| b.index)
    }

    pub fn chain_len(&self) -> usize {
        self.chain.read().len()
    }

    pub fn blocks_from(&self, height: u64) -> Vec<Block> {
        self.chain.read().blocks_from(height)
    }

    pub fn pending_transactions(&self, limit: usize) -> Vec<Transaction> {
        self.registry.pending(limit)
    }

    pub fn pending_count(&self) -> usize {
        self.registry.pending_count()
    }

    pub fn is_quarantined(&self) -> bool {
        self.quarantined.load(Ordering::SeqCst)
    }
}

impl<C: ChainLog, I: NameIndexApi + Send> NodeStateApi for NodeState<C, I> {
    fn apply_block(&self, block: Block) -> NodeResult<ApplySummary> {
        NodeState::apply_block(self, block)
    }

    fn submit_transaction(&self, tx: Transaction) {
        NodeState::submit_transaction(self, tx)
    }

    fn resolve(&self, domain_name: &str) -> Option<IndexRecord> {
        NodeState::resolve(self, domain_name)
    }

    fn index_digest(&self) -> Digest {
        NodeState::index_digest(self)
    }

    fn latest_block(&self) -> Option<Block> {
        NodeState::latest_block(self)
    }

    fn blocks_from(&self, height: u64) -> Vec<Block> {
        NodeState::blocks_from(self, height)
    }

    fn pending_transactions(&self, limit: usize) -> Vec<Transaction> {
        NodeState::pending_transactions(self, limit)
    }
}

impl<C, I> std::fmt::Debug for NodeState<C, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeState")
            .field("config", &self.config)
            .field("quarantined", &self.quarantined.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}
