//! In-memory chain log

use crate::domain::ChainError;
use crate::ports::ChainLog;
use shared_types::Block;

/// A `Vec` of blocks where position equals block index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryChain {
    blocks: Vec<Block>,
}

impl InMemoryChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_at(&self, height: u64) -> Option<&Block> {
        usize::try_from(height).ok().and_then(|h| self.blocks.get(h))
    }
}

impl ChainLog for InMemoryChain {
    fn latest_block(&self) -> Option<&Block> {
        self.blocks.last()
    }

    fn blocks_from(&self, height: u64) -> Vec<Block> {
        usize::try_from(height)
            .ok()
            .and_then(|start| self.blocks.get(start..))
            .map(<[Block]>::to_vec)
            .unwrap_or_default()
    }

    fn add_block(&mut self, block: Block) -> Result<(), ChainError> {
        let expected = self.blocks.len() as u64;
        if block.index != expected {
            return Err(ChainError::NonContiguous {
                expected,
                actual: block.index,
            });
        }
        self.blocks.push(block);
        Ok(())
    }

    fn len(&self) -> usize {
        self.blocks.len()
    }
}
