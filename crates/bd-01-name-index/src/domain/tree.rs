//! # Name Index
//!
//! The container that owns the tree root. All mutations take `&mut self`;
//! shared access is read-only.

use super::digest::subtree_digest;
use super::errors::{IndexError, IndexResult};
use super::node::{self, IndexNode, Link};
use super::value_objects::{Digest, IndexRecord, IndexStats, NameKey};
use std::fmt;

/// Self-balancing ordered index of registered names.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    root: Link,
    len: usize,
}

impl NameIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing the existing record for `key` if present.
    ///
    /// Replacing leaves the tree shape untouched. Returns the replaced record.
    pub fn add(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord> {
        let (root, replaced) = node::insert(self.root.take(), key, record);
        self.root = Some(root);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Replace the record for `key` by removing it and inserting again.
    ///
    /// An absent key is simply inserted. Returns the previous record.
    pub fn update(&mut self, key: NameKey, record: IndexRecord) -> Option<IndexRecord> {
        let previous = self.remove(&key);
        self.add(key, record);
        previous
    }

    /// Remove `key`, returning its record. Absent keys are a no-op.
    pub fn remove(&mut self, key: &NameKey) -> Option<IndexRecord> {
        let (root, removed) = node::remove(self.root.take(), key);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    pub fn search(&self, key: &NameKey) -> Option<&IndexRecord> {
        node::search(&self.root, key)
    }

    pub fn contains(&self, key: &NameKey) -> bool {
        self.search(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root; 0 when empty.
    pub fn height(&self) -> u32 {
        node::height(&self.root)
    }

    /// Root digest. The sentinel when empty.
    pub fn digest(&self) -> Digest {
        subtree_digest(&self.root)
    }

    /// Lazy in-order walk over the keys.
    pub fn keys(&self) -> Keys<'_> {
        Keys { inner: self.iter() }
    }

    /// Lazy in-order walk over keys and records.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: descend_left(Vec::new(), &self.root),
        }
    }

    /// Check ordering, heights, balance and the tracked length.
    pub fn verify(&self) -> IndexResult<IndexStats> {
        let (height, reachable) = node::verify(&self.root, None, None)?;
        if reachable != self.len {
            return Err(IndexError::LengthMismatch {
                tracked: self.len,
                reachable,
            });
        }
        Ok(IndexStats {
            len: reachable,
            height,
        })
    }
}

fn descend_left<'a>(mut stack: Vec<&'a IndexNode>, mut link: &'a Link) -> Vec<&'a IndexNode> {
    while let Some(node) = link {
        stack.push(node);
        link = &node.left;
    }
    stack
}

/// In-order key iterator returned by [`NameIndex::keys`].
pub struct Keys<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = &'a NameKey;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }
}

/// In-order entry iterator returned by [`NameIndex::iter`].
pub struct Iter<'a> {
    stack: Vec<&'a IndexNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a NameKey, &'a IndexRecord);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let stack = std::mem::take(&mut self.stack);
        self.stack = descend_left(stack, &node.right);
        Some((&node.key, &node.record))
    }
}

/// Space-separated ascending key listing, for logs.
impl fmt::Display for NameIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
