//! # Block Producer
//!
//! Each slot, the node that leads the current epoch takes up to
//! `max_txs_per_block` pending transactions (ascending tid), applies the
//! block locally, then broadcasts it followed by an `Inv`.

use crate::adapters::ChannelTransport;
use bd_03_node_state::NodeState;
use bd_04_peer_sync::PeerMessage;
use shared_types::{short_id, AuthorityId, Block};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Current unix time in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub struct BlockProducer {
    identity: AuthorityId,
    state: Arc<NodeState>,
    transport: Arc<ChannelTransport>,
    max_txs_per_block: usize,
}

impl BlockProducer {
    pub fn new(
        identity: AuthorityId,
        state: Arc<NodeState>,
        transport: Arc<ChannelTransport>,
        max_txs_per_block: usize,
    ) -> Self {
        Self {
            identity,
            state,
            transport,
            max_txs_per_block,
        }
    }

    /// Produce a block stamped `timestamp` if this node leads its epoch.
    ///
    /// Returns the block once applied locally and broadcast. Does nothing
    /// before genesis or when the tip is not older than `timestamp`.
    pub fn produce_at(&self, timestamp: u64) -> Option<Block> {
        let consensus = self.state.consensus();
        let epoch = consensus.epoch_of(timestamp).ok()?;
        let leader = consensus.expected_leader(epoch).ok()?;
        if leader != self.identity {
            return None;
        }

        let tip = self.state.latest_block()?;
        if tip.timestamp >= timestamp {
            debug!(
                "[runtime] {} already has a block for t={}",
                short_id(&self.identity),
                timestamp
            );
            return None;
        }

        let transactions = self.state.pending_transactions(self.max_txs_per_block);
        let block = Block::child_of(&tip, timestamp, self.identity, transactions);

        if let Err(e) = self.state.apply_block(block.clone()) {
            warn!(
                "[runtime] {} could not apply own block {}: {}",
                short_id(&self.identity),
                block.index,
                e
            );
            return None;
        }

        let delivered = self.transport.broadcast(&PeerMessage::Block(block.clone()));
        self.transport.broadcast(&PeerMessage::Inv);
        info!(
            "[runtime] {} produced block {} (epoch {}, {} txs) for {} peers",
            short_id(&self.identity),
            block.index,
            epoch,
            block.transactions.len(),
            delivered.sent
        );
        Some(block)
    }

    /// Try to produce once per slot until shutdown.
    pub async fn run(self, slot_interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(slot_interval);
        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.produce_at(unix_now());
                }
                _ = shutdown.changed() => break,
            }
        }
        debug!("[runtime] {} producer stopped", short_id(&self.identity));
    }
}
