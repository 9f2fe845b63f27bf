//! # Transaction Pool
//!
//! Submitted transactions waiting for a block, keyed by transaction id.
//! Unordered; snapshots are sorted by id so block producers are
//! deterministic.

use shared_types::{Transaction, TransactionId};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct TransactionPool {
    by_tid: HashMap<TransactionId, Transaction>,
}

impl TransactionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by id. Returns the overwritten transaction.
    pub fn insert(&mut self, tx: Transaction) -> Option<Transaction> {
        self.by_tid.insert(tx.tid, tx)
    }

    pub fn get(&self, tid: TransactionId) -> Option<&Transaction> {
        self.by_tid.get(&tid)
    }

    pub fn contains(&self, tid: TransactionId) -> bool {
        self.by_tid.contains_key(&tid)
    }

    /// Remove every listed id. Returns how many were present.
    pub fn purge(&mut self, tids: impl IntoIterator<Item = TransactionId>) -> usize {
        tids.into_iter()
            .filter(|tid| self.by_tid.remove(tid).is_some())
            .count()
    }

    pub fn len(&self) -> usize {
        self.by_tid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tid.is_empty()
    }

    /// Up to `limit` transactions in ascending id order.
    pub fn snapshot(&self, limit: usize) -> Vec<Transaction> {
        let mut tids: Vec<TransactionId> = self.by_tid.keys().copied().collect();
        tids.sort_unstable();
        tids.into_iter()
            .take(limit)
            .filter_map(|tid| self.by_tid.get(&tid).cloned())
            .collect()
    }
}
