//! Synchronous multi-node network for integration tests.

use bd_02_consensus_gate::{
    AuthorityRegistry, ConsensusGate, ConsensusGateApi, RoundRobinSchedule, SlotConfig,
    SlotLeaderOracle,
};
use bd_03_node_state::{NodeState, NodeStateConfig};
use bd_04_peer_sync::{
    PeerMessage, PeerTransport, SyncApi, SyncConfig, SyncService, TransportError,
};
use parking_lot::Mutex;
use shared_types::{AuthorityId, Block, PeerAddress, Transaction};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

struct Wire {
    from: PeerAddress,
    to: PeerAddress,
    payload: Vec<u8>,
}

#[derive(Default)]
struct Switchboard {
    members: Mutex<Vec<PeerAddress>>,
    partitioned: Mutex<HashSet<PeerAddress>>,
    queue: Mutex<VecDeque<Wire>>,
}

/// Queues bincode-encoded messages on the shared switchboard.
struct QueueTransport {
    local: PeerAddress,
    board: Arc<Switchboard>,
}

impl PeerTransport for QueueTransport {
    fn direct_message(&self, message: PeerMessage, peer: &PeerAddress) -> Result<(), TransportError> {
        if !self.board.members.lock().contains(peer) {
            return Err(TransportError::UnknownPeer(peer.clone()));
        }
        let payload =
            bincode::serialize(&message).map_err(|e| TransportError::Codec(e.to_string()))?;
        self.board.queue.lock().push_back(Wire {
            from: self.local.clone(),
            to: peer.clone(),
            payload,
        });
        Ok(())
    }
}

pub struct TestNode {
    pub address: PeerAddress,
    pub identity: Option<AuthorityId>,
    pub state: Arc<NodeState>,
    pub sync: SyncService,
    transport: Arc<QueueTransport>,
}

impl TestNode {
    /// Apply a received block the way the runtime does: skip anything at or
    /// below the tip, drop anything refused.
    fn receive_block(&self, block: Block) -> bool {
        if matches!(self.state.tip_height(), Some(tip) if block.index <= tip) {
            return false;
        }
        self.state.apply_block(block).is_ok()
    }

    fn handle(&self, from: &PeerAddress, message: PeerMessage) {
        match message {
            PeerMessage::Inv => {
                self.sync.handle_inventory(from);
            }
            PeerMessage::GetData => {
                self.sync.handle_data_request(from);
            }
            PeerMessage::GetBlock { height } => {
                if self.sync.config().honor_requested_height {
                    self.sync.handle_block_request_from(from, height);
                } else {
                    self.sync.handle_block_request(from);
                }
            }
            PeerMessage::ProofRequest => {
                self.sync.handle_proof_request(from);
            }
            PeerMessage::Transaction(tx) => self.state.submit_transaction(tx),
            PeerMessage::Block(block) => {
                self.receive_block(block);
            }
        }
    }

    /// Send `message` to `peer` through this node's transport.
    pub fn send(&self, message: PeerMessage, peer: &PeerAddress) {
        self.transport
            .direct_message(message, peer)
            .expect("peer is a network member");
    }
}

/// Nodes `n0..n{k}` holding authorities `[1; 32]`, `[2; 32]`, ... in order.
pub struct TestNetwork {
    pub nodes: Vec<TestNode>,
    slots: SlotConfig,
    sync: SyncConfig,
    authorities: AuthorityRegistry,
    oracle: Arc<dyn SlotLeaderOracle>,
    board: Arc<Switchboard>,
}

pub fn authority(i: usize) -> AuthorityId {
    [i as u8 + 1; 32]
}

impl TestNetwork {
    pub fn new(authority_count: usize, sync: SyncConfig) -> Self {
        let slots = SlotConfig::for_testing();
        let authorities = AuthorityRegistry::new((0..authority_count).map(authority));
        let oracle: Arc<dyn SlotLeaderOracle> =
            Arc::new(RoundRobinSchedule::new(authorities.clone()));
        let mut network = Self {
            nodes: Vec::new(),
            slots,
            sync,
            authorities,
            oracle,
            board: Arc::new(Switchboard::default()),
        };
        for i in 0..authority_count {
            network.add_node(PeerAddress::new(format!("n{i}")), Some(authority(i)));
        }
        network
    }

    /// Add a node; observers pass `None`. Returns its position.
    pub fn add_node(&mut self, address: PeerAddress, identity: Option<AuthorityId>) -> usize {
        let gate: Arc<dyn ConsensusGateApi> = Arc::new(
            ConsensusGate::new(self.slots, self.authorities.clone(), self.oracle.clone())
                .expect("testing slot config is valid"),
        );
        let state = Arc::new(NodeState::new(NodeStateConfig::for_testing(), gate));
        let transport = Arc::new(QueueTransport {
            local: address.clone(),
            board: self.board.clone(),
        });
        let sync = SyncService::new(self.sync.clone(), state.clone(), transport.clone());

        self.board.members.lock().push(address.clone());
        self.nodes.push(TestNode {
            address,
            identity,
            state,
            sync,
            transport,
        });
        self.nodes.len() - 1
    }

    pub fn node(&self, i: usize) -> &TestNode {
        &self.nodes[i]
    }

    fn peers_of(&self, i: usize) -> Vec<PeerAddress> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, n)| n.address.clone())
            .collect()
    }

    /// Queue `message` from node `i` to every other node.
    pub fn broadcast(&self, i: usize, message: PeerMessage) {
        for peer in self.peers_of(i) {
            self.nodes[i].send(message.clone(), &peer);
        }
    }

    /// Drop every message addressed to node `i` until healed.
    pub fn partition(&self, i: usize) {
        self.board.partitioned.lock().insert(self.nodes[i].address.clone());
    }

    pub fn heal(&self, i: usize) {
        self.board.partitioned.lock().remove(&self.nodes[i].address);
    }

    /// Deliver queued messages, including replies, until the queue drains.
    /// Returns how many were handled.
    pub fn deliver(&self) -> usize {
        let mut handled = 0;
        loop {
            let Some(wire) = self.board.queue.lock().pop_front() else {
                return handled;
            };
            if self.board.partitioned.lock().contains(&wire.to) {
                continue;
            }
            let Some(node) = self.nodes.iter().find(|n| n.address == wire.to) else {
                continue;
            };
            let message: PeerMessage =
                bincode::deserialize(&wire.payload).expect("payload decodes");
            node.handle(&wire.from, message);
            handled += 1;
        }
    }

    fn leader_at(&self, timestamp: u64) -> AuthorityId {
        let epoch = self.slots.epoch_of(timestamp).expect("timestamp after slot 0");
        self.oracle.slot_leader(epoch).expect("schedule has authorities")
    }

    fn leader_node(&self, timestamp: u64) -> usize {
        let leader = self.leader_at(timestamp);
        self.nodes
            .iter()
            .position(|n| n.identity == Some(leader))
            .expect("leader runs a node")
    }

    /// Have the leader for `timestamp` build a block from its own pool,
    /// apply it, and announce it. Delivery is left to the caller.
    pub fn produce_at(&self, timestamp: u64) -> Block {
        let i = self.leader_node(timestamp);
        let node = &self.nodes[i];
        let leader = self.leader_at(timestamp);
        let transactions = node.state.pending_transactions(usize::MAX);
        let block = match node.state.latest_block() {
            Some(tip) => Block::child_of(&tip, timestamp, leader, transactions),
            None => Block::genesis(timestamp, leader, transactions),
        };
        node.state
            .apply_block(block.clone())
            .expect("leader accepts its own block");
        self.broadcast(i, PeerMessage::Block(block.clone()));
        self.broadcast(i, PeerMessage::Inv);
        block
    }

    /// Produce and deliver.
    pub fn produce_and_deliver(&self, timestamp: u64) -> Block {
        let block = self.produce_at(timestamp);
        self.deliver();
        block
    }

    /// Submit to node `i` and relay to its peers.
    pub fn submit(&self, i: usize, tx: Transaction) {
        self.nodes[i].state.submit_transaction(tx.clone());
        self.broadcast(i, PeerMessage::Transaction(tx));
    }

    /// True when every node agrees on tip height and index digest.
    pub fn converged(&self) -> bool {
        let first = &self.nodes[0];
        self.nodes.iter().all(|n| {
            n.state.tip_height() == first.state.tip_height()
                && n.state.index_digest() == first.state.index_digest()
        })
    }
}
