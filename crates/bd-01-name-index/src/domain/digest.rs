//! # Index Digest
//!
//! A Merkle-style summary of the whole tree:
//!
//! ```text
//! digest(empty) = SENTINEL_DIGEST
//! digest(node)  = SHA-256(digest(left) || key || tid_be || digest(right))
//! ```
//!
//! `key` is the UTF-8 bytes of the hex key and `tid_be` the transaction id as
//! eight big-endian bytes.

use super::node::{IndexNode, Link};
use super::value_objects::{Digest, NameKey, SENTINEL_DIGEST};
use sha2::{Digest as _, Sha256};
use shared_types::TransactionId;

/// Combine one node's key and transaction id with its children's digests.
pub fn compute_digest(
    left: &Digest,
    key: &NameKey,
    tid: TransactionId,
    right: &Digest,
) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(key.as_bytes());
    hasher.update(tid.to_be_bytes());
    hasher.update(right);
    hasher.finalize().into()
}

/// Digest of a subtree, computed bottom-up.
pub(crate) fn subtree_digest(link: &Link) -> Digest {
    match link {
        None => SENTINEL_DIGEST,
        Some(node) => node_digest(node),
    }
}

fn node_digest(node: &IndexNode) -> Digest {
    let left = subtree_digest(&node.left);
    let right = subtree_digest(&node.right);
    compute_digest(&left, &node.key, node.record.tid(), &right)
}
