//! # AVL Nodes
//!
//! Recursive tree algorithms. Every function that changes structure consumes
//! the subtree it works on and hands back the new subtree root.
//!
//! ## Rebalancing
//!
//! After each structural change the height of every node on the path back to
//! the root is recomputed and its balance factor `h(left) - h(right)` checked:
//!
//! | Factor | Child shape | Rotation |
//! |--------|-------------|----------|
//! | -2 | right child right-heavy or even | rotate left |
//! | -2 | right child left-heavy | rotate right child right, then rotate left |
//! | +2 | left child left-heavy or even | rotate right |
//! | +2 | left child right-heavy | rotate left child left, then rotate right |

use super::errors::{IndexError, IndexResult};
use super::value_objects::{IndexRecord, NameKey};
use std::cmp::Ordering;

/// An owned, possibly empty subtree.
pub(crate) type Link = Option<Box<IndexNode>>;

/// Internal tree node. Each node is owned by exactly one parent.
#[derive(Debug, Clone)]
pub(crate) struct IndexNode {
    pub(crate) key: NameKey,
    pub(crate) record: IndexRecord,
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

/// Height of a subtree; an empty subtree has height 0.
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

impl IndexNode {
    fn leaf(key: NameKey, record: IndexRecord) -> Box<Self> {
        Box::new(Self {
            key,
            record,
            height: 1,
            left: None,
            right: None,
        })
    }

    fn recalculate_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    pub(crate) fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }

    /// Promote the right child. A node without a right child is returned as is.
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.right.take() else {
            return self;
        };
        self.right = new_root.left.take();
        self.recalculate_height();
        new_root.left = Some(self);
        new_root.recalculate_height();
        new_root
    }

    /// Promote the left child. A node without a left child is returned as is.
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let Some(mut new_root) = self.left.take() else {
            return self;
        };
        self.left = new_root.right.take();
        self.recalculate_height();
        new_root.right = Some(self);
        new_root.recalculate_height();
        new_root
    }

    /// Recompute this node's height and restore its balance.
    fn rebalance(mut self: Box<Self>) -> Box<Self> {
        self.recalculate_height();

        let balanced = match self.balance_factor() {
            -2 => {
                if let Some(right) = self.right.take() {
                    let right = if height(&right.left) > height(&right.right) {
                        right.rotate_right()
                    } else {
                        right
                    };
                    self.right = Some(right);
                }
                self.rotate_left()
            }
            2 => {
                if let Some(left) = self.left.take() {
                    let left = if height(&left.right) > height(&left.left) {
                        left.rotate_left()
                    } else {
                        left
                    };
                    self.left = Some(left);
                }
                self.rotate_right()
            }
            _ => self,
        };

        debug_assert!(
            balanced.balance_factor().abs() <= 1,
            "rebalance left {} with factor {}",
            balanced.key,
            balanced.balance_factor()
        );
        balanced
    }
}

/// Insert `key`, or overwrite its record if already present.
///
/// Returns the new subtree root and the replaced record, if any. Overwriting
/// leaves the structure untouched.
pub(crate) fn insert(
    link: Link,
    key: NameKey,
    record: IndexRecord,
) -> (Box<IndexNode>, Option<IndexRecord>) {
    let Some(mut node) = link else {
        return (IndexNode::leaf(key, record), None);
    };

    let replaced = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, replaced) = insert(node.left.take(), key, record);
            node.left = Some(child);
            replaced
        }
        Ordering::Greater => {
            let (child, replaced) = insert(node.right.take(), key, record);
            node.right = Some(child);
            replaced
        }
        Ordering::Equal => {
            let previous = std::mem::replace(&mut node.record, record);
            return (node, Some(previous));
        }
    };

    (node.rebalance(), replaced)
}

/// Remove `key` if present.
///
/// A node with two children takes over the key and record of its in-order
/// successor, which is then removed from the right subtree.
pub(crate) fn remove(link: Link, key: &NameKey) -> (Link, Option<IndexRecord>) {
    let Some(mut node) = link else {
        return (None, None);
    };

    let removed = match key.cmp(&node.key) {
        Ordering::Less => {
            let (child, removed) = remove(node.left.take(), key);
            node.left = child;
            removed
        }
        Ordering::Greater => {
            let (child, removed) = remove(node.right.take(), key);
            node.right = child;
            removed
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (rest, successor) = take_min(right);
                let IndexNode {
                    key: successor_key,
                    record: successor_record,
                    ..
                } = *successor;
                node.left = Some(left);
                node.right = rest;
                node.key = successor_key;
                Some(std::mem::replace(&mut node.record, successor_record))
            }
            (Some(child), None) | (None, Some(child)) => {
                let IndexNode { record, .. } = *node;
                return (Some(child), Some(record));
            }
            (None, None) => {
                let IndexNode { record, .. } = *node;
                return (None, Some(record));
            }
        },
    };

    (Some(node.rebalance()), removed)
}

/// Detach the minimum node of a subtree, rebalancing on the way back up.
fn take_min(mut node: Box<IndexNode>) -> (Link, Box<IndexNode>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (rest, min) = take_min(left);
            node.left = rest;
            (Some(node.rebalance()), min)
        }
    }
}

/// Point lookup.
pub(crate) fn search<'a>(mut link: &'a Link, key: &NameKey) -> Option<&'a IndexRecord> {
    while let Some(node) = link {
        link = match key.cmp(&node.key) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return Some(&node.record),
        };
    }
    None
}

/// Walk a subtree checking ordering, heights and balance.
///
/// `lower`/`upper` are exclusive bounds inherited from ancestors. Returns the
/// subtree's height and node count.
pub(crate) fn verify(
    link: &Link,
    lower: Option<&NameKey>,
    upper: Option<&NameKey>,
) -> IndexResult<(u32, usize)> {
    let Some(node) = link else {
        return Ok((0, 0));
    };

    let above_lower = lower.map_or(true, |bound| node.key > *bound);
    let below_upper = upper.map_or(true, |bound| node.key < *bound);
    if !above_lower || !below_upper {
        return Err(IndexError::OrderViolation {
            key: node.key.clone(),
        });
    }

    let (left_height, left_count) = verify(&node.left, lower, Some(&node.key))?;
    let (right_height, right_count) = verify(&node.right, Some(&node.key), upper)?;

    let actual = 1 + left_height.max(right_height);
    if node.height != actual {
        return Err(IndexError::HeightMismatch {
            key: node.key.clone(),
            stored: node.height,
            actual,
        });
    }

    let balance = i64::from(left_height) - i64::from(right_height);
    if balance.abs() > 1 {
        return Err(IndexError::Unbalanced {
            key: node.key.clone(),
            balance,
        });
    }

    Ok((actual, left_count + right_count + 1))
}
