//! # Inbound Dispatch
//!
//! | Message | Action |
//! |---------|--------|
//! | `Inv` | `SyncService::handle_inventory` |
//! | `GetData` | `SyncService::handle_data_request` |
//! | `GetBlock { height }` | `handle_block_request_from` or `handle_block_request` |
//! | `ProofRequest` | `SyncService::handle_proof_request` |
//! | `Transaction` | `NodeState::submit_transaction` |
//! | `Block` | `NodeState::apply_block`, skipping blocks at or below the tip |

use crate::adapters::Envelope;
use bd_03_node_state::NodeState;
use bd_04_peer_sync::{PeerMessage, SendReport, SyncApi, SyncService};
use shared_types::{Block, PeerAddress};
use std::sync::Arc;
use tokio::sync::{mpsc::UnboundedReceiver, watch};
use tracing::{debug, info, warn};

/// What a dispatched message led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// A sync handler answered.
    Replied(SendReport),
    /// A transaction entered the pool.
    Submitted,
    /// A block was applied.
    Applied,
    /// A block we already have.
    Skipped,
    /// A block the node refused.
    Rejected,
}

pub struct InboundHandler {
    address: PeerAddress,
    state: Arc<NodeState>,
    sync: Arc<SyncService>,
}

impl InboundHandler {
    pub fn new(address: PeerAddress, state: Arc<NodeState>, sync: Arc<SyncService>) -> Self {
        Self {
            address,
            state,
            sync,
        }
    }

    pub fn handle(&self, from: &PeerAddress, message: PeerMessage) -> Dispatch {
        debug!("[runtime] {} received {} from {}", self.address, message.kind(), from);
        match message {
            PeerMessage::Inv => Dispatch::Replied(self.sync.handle_inventory(from)),
            PeerMessage::GetData => Dispatch::Replied(self.sync.handle_data_request(from)),
            PeerMessage::GetBlock { height } => {
                let report = if self.sync.config().honor_requested_height {
                    self.sync.handle_block_request_from(from, height)
                } else {
                    self.sync.handle_block_request(from)
                };
                Dispatch::Replied(report)
            }
            PeerMessage::ProofRequest => Dispatch::Replied(self.sync.handle_proof_request(from)),
            PeerMessage::Transaction(tx) => {
                self.state.submit_transaction(tx);
                Dispatch::Submitted
            }
            PeerMessage::Block(block) => self.receive_block(from, block),
        }
    }

    fn receive_block(&self, from: &PeerAddress, block: Block) -> Dispatch {
        if let Some(tip) = self.state.tip_height() {
            if block.index <= tip {
                debug!(
                    "[runtime] {} skipping block {} from {} (tip {})",
                    self.address, block.index, from, tip
                );
                return Dispatch::Skipped;
            }
        }

        let index = block.index;
        match self.state.apply_block(block) {
            Ok(_) => Dispatch::Applied,
            Err(e) => {
                warn!(
                    "[runtime] {} discarded block {} from {}: {}",
                    self.address, index, from, e
                );
                Dispatch::Rejected
            }
        }
    }

    /// Decode and dispatch envelopes until the inbox closes or shutdown is
    /// signalled.
    pub async fn run(
        self: Arc<Self>,
        mut inbox: UnboundedReceiver<Envelope>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                envelope = inbox.recv() => {
                    let Some(envelope) = envelope else { break };
                    match envelope.decode() {
                        Ok(message) => {
                            self.handle(&envelope.from, message);
                        }
                        Err(e) => warn!(
                            "[runtime] {} dropped undecodable message from {}: {}",
                            self.address, envelope.from, e
                        ),
                    }
                }
                _ = shutdown.changed() => break,
            }
        }
        info!("[runtime] {} inbound handler stopped", self.address);
    }
}
