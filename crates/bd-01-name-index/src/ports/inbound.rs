//! # Inbound Ports (Driving Ports)
//!
//! The API the block-application pipeline drives the index through.

use crate::domain::{Digest, IndexRecord, IndexResult, IndexStats, NameIndex, NameKey};

/// Operations the node state performs on its name index.
///
/// Implementors must keep the tree balanced and ordered across every call;
/// `verify` re-checks that on demand.
pub trait NameIndexApi {
    /// Insert or overwrite. Returns the replaced record.
    fn add(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord>;

    /// Equivalent to `remove(key)` followed by `add(key, record)`.
    fn update(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord>;

    /// Delete if present. Returns the removed record.
    fn remove(&mut self, key: &NameKey) -> Option<IndexRecord>;

    fn search(&self, key: &NameKey) -> Option<&IndexRecord>;

    /// Root digest of the whole index.
    fn digest(&self) -> Digest;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full structural check.
    ///
    /// ## Returns
    ///
    /// - `Ok(IndexStats)`: size and height of a well-formed tree
    /// - `Err(IndexError)`: the first violation found
    fn verify(&self) -> IndexResult<IndexStats>;
}

impl NameIndexApi for NameIndex {
    fn add(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord> {
        NameIndex::add(self, key, record)
    }

    fn update(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord> {
        NameIndex::update(self, key, record)
    }

    fn remove(&mut self, key: &NameKey) -> Option<IndexRecord> {
        NameIndex::remove(self, key)
    }

    fn search(&self, key: &NameKey) -> Option<&IndexRecord> {
        NameIndex::search(self, key)
    }

    fn digest(&self) -> Digest {
        NameIndex::digest(self)
    }

    fn len(&self) -> usize {
        NameIndex::len(self)
    }

    fn is_empty(&self) -> bool {
        NameIndex::is_empty(self)
    }

    fn verify(&self) -> IndexResult<IndexStats> {
        NameIndex::verify(self)
    }
}
