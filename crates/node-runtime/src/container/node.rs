//! # Devnet Node
//!
//! One node's subsystems, wired in dependency order:
//!
//! 1. Consensus gate (slot config, authority registry, leader schedule)
//! 2. Node state (name index, pool, chain) behind the gate
//! 3. Transport joined to the shared network
//! 4. Sync service reading the node state, sending through the transport
//! 5. Inbound handler and, for authorities, the block producer

use super::config::NodeConfig;
use crate::adapters::{ChannelNetwork, ChannelTransport, Envelope};
use crate::handlers::{BlockProducer, InboundHandler};
use anyhow::{Context, Result};
use bd_02_consensus_gate::{
    AuthorityRegistry, ConsensusGate, ConsensusGateApi, SlotLeaderOracle,
};
use bd_03_node_state::NodeState;
use bd_04_peer_sync::{PeerMessage, PeerTransport, SyncApi, SyncService};
use shared_types::{AuthorityId, PeerAddress};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{info, warn};

pub struct DevnetNode {
    pub address: PeerAddress,
    /// `None` for an observer that never produces.
    pub identity: Option<AuthorityId>,
    pub state: Arc<NodeState>,
    pub sync: Arc<SyncService>,
    pub transport: Arc<ChannelTransport>,
    pub inbound: Arc<InboundHandler>,
    max_txs_per_block: usize,
}

impl DevnetNode {
    /// Wire a node and join it to `network`. Returns the node and its inbox.
    pub fn build(
        address: PeerAddress,
        identity: Option<AuthorityId>,
        config: &NodeConfig,
        authorities: AuthorityRegistry,
        oracle: Arc<dyn SlotLeaderOracle>,
        network: &ChannelNetwork,
    ) -> Result<(Self, UnboundedReceiver<Envelope>)> {
        let gate: Arc<dyn ConsensusGateApi> = Arc::new(
            ConsensusGate::new(config.slots, authorities, oracle)
                .with_context(|| format!("Invalid slot configuration for {address}"))?,
        );
        let state = Arc::new(NodeState::new(config.state.clone(), gate));

        let (transport, inbox) = network.join(address.clone());
        let transport = Arc::new(transport);

        let sync = Arc::new(SyncService::new(
            config.sync.clone(),
            state.clone(),
            transport.clone(),
        ));
        let inbound = Arc::new(InboundHandler::new(
            address.clone(),
            state.clone(),
            sync.clone(),
        ));

        let node = Self {
            address,
            identity,
            state,
            sync,
            transport,
            inbound,
            max_txs_per_block: config.devnet.max_txs_per_block,
        };
        Ok((node, inbox))
    }

    /// The block producer, for authority nodes.
    pub fn producer(&self) -> Option<BlockProducer> {
        self.identity.map(|identity| {
            BlockProducer::new(
                identity,
                self.state.clone(),
                self.transport.clone(),
                self.max_txs_per_block,
            )
        })
    }

    /// Catch up after joining: ask every peer for its pending transactions,
    /// and answer as if each had announced new blocks.
    pub fn request_catch_up(&self) {
        for peer in self.transport.peers() {
            if let Err(e) = self.transport.direct_message(PeerMessage::GetData, &peer) {
                warn!("[runtime] {} failed to send GETDATA to {}: {}", self.address, peer, e);
            }
            self.sync.handle_inventory(&peer);
        }
        info!(
            "[runtime] {} requested catch-up from {} peers",
            self.address,
            self.transport.peers().len()
        );
    }
}
