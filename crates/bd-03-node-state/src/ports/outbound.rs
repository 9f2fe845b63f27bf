//! Driven ports (Outbound dependencies)

use crate::domain::ChainError;
use shared_types::Block;

/// Append-only block log.
///
/// The node state wraps it in its Chain lock; implementations need no
/// synchronization of their own.
pub trait ChainLog: Send + Sync {
    /// The highest block, if any.
    fn latest_block(&self) -> Option<&Block>;

    /// Every block with index `>= height`, ascending. Empty when `height` is
    /// beyond the tip.
    fn blocks_from(&self, height: u64) -> Vec<Block>;

    /// Append a block. Must extend the current tip by exactly one.
    fn add_block(&mut self, block: Block) -> Result<(), ChainError>;

    /// Number of blocks stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
