//! # Registry
//!
//! The Index+Pool lock scope. The name index and the transaction pool live
//! behind one mutex and are only reachable through the composite operations
//! below; no guard ever leaves this module.

use super::pool::TransactionPool;
use bd_01_name_index::{
    Digest, IndexRecord, IndexResult, IndexStats, NameIndex, NameIndexApi, NameKey,
};
use parking_lot::Mutex;
use shared_types::{Block, Transaction, TransactionId, TransactionKind};
use tracing::debug;

/// The state guarded by the Index+Pool lock.
#[derive(Debug, Default)]
struct RegistryState<I> {
    index: I,
    pool: TransactionPool,
}

/// Counts of what one block did to the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub registered: usize,
    pub updated: usize,
    pub revoked: usize,
    /// Block transactions that were still pending and got removed from the pool.
    pub purged: usize,
}

/// Name index and transaction pool under a single lock.
#[derive(Debug, Default)]
pub struct Registry<I = NameIndex> {
    state: Mutex<RegistryState<I>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ascending listing of every key, for diagnostics.
    pub fn describe_index(&self) -> String {
        self.state.lock().index.to_string()
    }
}

impl<I: NameIndexApi> Registry<I> {
    /// Wrap an existing index with an empty pool.
    pub fn with_index(index: I) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                index,
                pool: TransactionPool::new(),
            }),
        }
    }

    /// Apply every transaction of `block` in order, then purge them from the
    /// pool. With `verify` set, the index is checked before the lock is
    /// released.
    ///
    /// On a failed check the mutations stay in place; the caller is expected
    /// to stop using this registry.
    pub fn apply_block(&self, block: &Block, verify: bool) -> IndexResult<ApplySummary> {
        let mut state = self.state.lock();
        let mut summary = ApplySummary::default();

        for tx in &block.transactions {
            let key = NameKey::from_domain(&tx.domain_name);
            match tx.kind {
                TransactionKind::Register => {
                    state
                        .index
                        .add(key, IndexRecord::new(tx.clone(), block.index));
                    summary.registered += 1;
                }
                TransactionKind::Update => {
                    state
                        .index
                        .update(key, IndexRecord::new(tx.clone(), block.index));
                    summary.updated += 1;
                }
                TransactionKind::Revoke => {
                    state.index.remove(&key);
                    summary.revoked += 1;
                }
            }
            debug!(
                "[bd-03] {} {} (tid {}) from block {}",
                tx.kind, tx.domain_name, tx.tid, block.index
            );
        }

        summary.purged = state.pool.purge(block.transaction_ids());

        if verify {
            state.index.verify()?;
        }
        Ok(summary)
    }

    /// Insert or overwrite a pending transaction. Returns the overwritten one.
    pub fn submit(&self, tx: Transaction) -> Option<Transaction> {
        self.state.lock().pool.insert(tx)
    }

    /// Up to `limit` pending transactions in ascending id order.
    pub fn pending(&self, limit: usize) -> Vec<Transaction> {
        self.state.lock().pool.snapshot(limit)
    }

    pub fn pending_count(&self) -> usize {
        self.state.lock().pool.len()
    }

    pub fn is_pending(&self, tid: TransactionId) -> bool {
        self.state.lock().pool.contains(tid)
    }

    /// Current record for a domain name.
    pub fn resolve(&self, domain_name: &str) -> Option<IndexRecord> {
        let key = NameKey::from_domain(domain_name);
        self.state.lock().index.search(&key).cloned()
    }

    pub fn digest(&self) -> Digest {
        self.state.lock().index.digest()
    }

    pub fn name_count(&self) -> usize {
        self.state.lock().index.len()
    }

    /// Full structural check of the index.
    pub fn verify(&self) -> IndexResult<IndexStats> {
        self.state.lock().index.verify()
    }
}
