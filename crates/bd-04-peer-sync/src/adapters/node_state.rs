//! `ChainReader` over the node state

use crate::ports::ChainReader;
use bd_01_name_index::NameIndexApi;
use bd_03_node_state::{ChainLog, NodeState};
use shared_types::{Block, Transaction};

impl<C: ChainLog, I: NameIndexApi + Send> ChainReader for NodeState<C, I> {
    fn tip_height(&self) -> Option<u64> {
        NodeState::tip_height(self)
    }

    fn latest_block(&self) -> Option<Block> {
        NodeState::latest_block(self)
    }

    fn blocks_from(&self, height: u64) -> Vec<Block> {
        NodeState::blocks_from(self, height)
    }

    fn pending_transactions(&self) -> Vec<Transaction> {
        NodeState::pending_transactions(self, usize::MAX)
    }
}
