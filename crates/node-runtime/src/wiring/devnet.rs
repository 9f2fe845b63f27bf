//! # Devnet
//!
//! ## Startup Sequence
//!
//! 1. Derive authority identities and the round-robin leader schedule
//! 2. Build one node per authority and spawn its inbound handler
//! 3. The epoch-0 leader builds, applies and broadcasts genesis
//! 4. `spawn_producers` starts the per-slot producer loops

use crate::adapters::ChannelNetwork;
use crate::container::{DevnetNode, NodeConfig};
use crate::genesis::{devnet_authorities, GenesisBuilder};
use crate::handlers::producer::unix_now;
use anyhow::{anyhow, Context, Result};
use bd_02_consensus_gate::{AuthorityRegistry, RoundRobinSchedule, SlotLeaderOracle};
use bd_04_peer_sync::PeerMessage;
use shared_types::{short_id, AuthorityId, Block, PeerAddress};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

pub struct Devnet {
    config: NodeConfig,
    network: ChannelNetwork,
    authorities: AuthorityRegistry,
    oracle: Arc<dyn SlotLeaderOracle>,
    nodes: Vec<Arc<DevnetNode>>,
    tasks: Vec<JoinHandle<()>>,
    shutdown_tx: watch::Sender<bool>,
    shutdown_rx: watch::Receiver<bool>,
}

impl Devnet {
    /// Build every node and bootstrap the chain with genesis.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(config: NodeConfig) -> Result<Self> {
        config.validate().context("Invalid node configuration")?;

        let identities = devnet_authorities(config.devnet.node_count);
        let authorities = AuthorityRegistry::new(identities.iter().copied());
        let oracle: Arc<dyn SlotLeaderOracle> =
            Arc::new(RoundRobinSchedule::new(authorities.clone()));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let mut devnet = Self {
            config,
            network: ChannelNetwork::new(),
            authorities,
            oracle,
            nodes: Vec::new(),
            tasks: Vec::new(),
            shutdown_tx,
            shutdown_rx,
        };

        for (i, identity) in identities.into_iter().enumerate() {
            devnet.add_node(PeerAddress::new(format!("node-{i}")), Some(identity))?;
        }
        devnet.bootstrap_genesis()?;

        info!(
            "[runtime] Devnet started: {} nodes, {}s slots, {} slots per epoch",
            devnet.nodes.len(),
            devnet.config.slots.slot_interval_secs,
            devnet.config.slots.slots_per_epoch
        );
        Ok(devnet)
    }

    fn add_node(
        &mut self,
        address: PeerAddress,
        identity: Option<AuthorityId>,
    ) -> Result<Arc<DevnetNode>> {
        let (node, inbox) = DevnetNode::build(
            address,
            identity,
            &self.config,
            self.authorities.clone(),
            self.oracle.clone(),
            &self.network,
        )?;
        let node = Arc::new(node);
        let handler = node.inbound.clone();
        self.tasks
            .push(tokio::spawn(handler.run(inbox, self.shutdown_rx.clone())));
        self.nodes.push(node.clone());
        Ok(node)
    }

    fn bootstrap_genesis(&self) -> Result<()> {
        let genesis = GenesisBuilder::new(self.config.slots)
            .with_records(self.config.devnet.genesis_records.iter().cloned())
            .build(self.oracle.as_ref())?;

        let producer = self
            .nodes
            .iter()
            .find(|node| node.identity == Some(genesis.producer))
            .ok_or_else(|| anyhow!("No node holds the epoch-0 leader identity"))?;

        producer
            .state
            .apply_block(genesis.clone())
            .context("Genesis rejected by its own producer")?;
        producer.transport.broadcast(&PeerMessage::Block(genesis.clone()));
        info!(
            "[runtime] Genesis {} produced by {} ({} records)",
            short_id(&genesis.hash()),
            producer.address,
            genesis.transactions.len()
        );
        Ok(())
    }

    /// Start a non-producing node that catches up from its peers.
    pub fn join_observer(&mut self, address: PeerAddress) -> Result<Arc<DevnetNode>> {
        let node = self.add_node(address, None)?;
        node.request_catch_up();
        Ok(node)
    }

    /// Spawn one producer loop per authority node.
    pub fn spawn_producers(&mut self) {
        let interval = Duration::from_secs(self.config.slots.slot_interval_secs);
        let producers: Vec<_> = self.nodes.iter().filter_map(|n| n.producer()).collect();
        for producer in producers {
            self.tasks
                .push(tokio::spawn(producer.run(interval, self.shutdown_rx.clone())));
        }
    }

    /// Run one production round at `timestamp` on every authority node.
    ///
    /// At most one node leads the epoch, so at most one block comes back.
    pub fn produce_at(&self, timestamp: u64) -> Option<Block> {
        self.nodes
            .iter()
            .filter_map(|node| node.producer())
            .find_map(|producer| producer.produce_at(timestamp))
    }

    /// Produce at the current wall-clock time.
    pub fn produce_now(&self) -> Option<Block> {
        self.produce_at(unix_now())
    }

    pub fn nodes(&self) -> &[Arc<DevnetNode>] {
        &self.nodes
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// True when every node has the same tip and index digest.
    pub fn is_converged(&self) -> bool {
        let Some(first) = self.nodes.first() else {
            return true;
        };
        let tip = first.state.tip_height();
        let digest = first.state.index_digest();
        self.nodes
            .iter()
            .all(|n| n.state.tip_height() == tip && n.state.index_digest() == digest)
    }

    /// Signal every task to stop and wait for them.
    pub async fn shutdown(self) {
        info!("[runtime] Initiating devnet shutdown...");
        if let Err(e) = self.shutdown_tx.send(true) {
            error!("[runtime] Failed to send shutdown signal: {}", e);
        }
        for task in self.tasks {
            if let Err(e) = task.await {
                error!("[runtime] Task ended abnormally: {}", e);
            }
        }
        info!("[runtime] Shutdown complete");
    }
}
