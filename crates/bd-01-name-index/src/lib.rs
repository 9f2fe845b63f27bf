//! # Name Index Subsystem (bd-01)
//!
//! The Name Index is the node's local view of the registry: for every
//! registered domain it stores the transaction that last set the name's
//! resolution data, keyed by the SHA-256 of the domain name.
//!
//! ## Structure
//!
//! An AVL tree with exclusively owned (`Box`) children. Every structural
//! operation returns the new subtree root and the container keeps the latest
//! one, so no node is ever shared or aliased.
//!
//! ```text
//!                 [k4]            k = hex(sha256(domain_name))
//!               /      \
//!           [k2]        [k6]      |h(left) - h(right)| <= 1 at every node
//!          /    \      /    \
//!       [k1]  [k3]  [k5]  [k7]    in-order walk = strictly ascending keys
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement | Location |
//! |----|-----------|-------------|----------|
//! | INVARIANT-1 | Balance factor in [-1, 1] | Rebalance on every ancestor | domain/node.rs |
//! | INVARIANT-2 | Strict key ordering, no duplicates | Upsert on equal keys | domain/node.rs |
//! | INVARIANT-3 | Cached heights are exact | Recomputed bottom-up | domain/node.rs |
//! | INVARIANT-4 | Deterministic digest | SHA-256, fixed traversal | domain/digest.rs |
//!
//! `NameIndex::verify` re-checks INVARIANT-1..3 over the whole tree.
//!
//! ## Digest
//!
//! `digest(node) = SHA-256(digest(left) || key || tid || digest(right))`, with
//! the all-zero sentinel for an empty subtree. The digest depends on tree
//! shape, so two indexes holding the same names may disagree on it when their
//! mutation histories differ. No inclusion proof is extracted from it.

pub mod domain;
pub mod ports;

pub use domain::{
    compute_digest, Digest, IndexError, IndexRecord, IndexResult, IndexStats, Iter, Keys,
    NameIndex, NameKey, SENTINEL_DIGEST,
};
pub use ports::NameIndexApi;
