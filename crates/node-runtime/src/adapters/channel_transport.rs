//! # Channel Transport
//!
//! In-process `PeerTransport`. Every node joins a shared [`ChannelNetwork`]
//! and gets an unbounded inbox; messages travel bincode-encoded, as they
//! would on a socket.

use bd_04_peer_sync::{PeerMessage, PeerTransport, SendReport, TransportError};
use parking_lot::RwLock;
use shared_types::PeerAddress;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::warn;

/// An encoded message in flight.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub from: PeerAddress,
    pub payload: Vec<u8>,
}

impl Envelope {
    pub fn decode(&self) -> Result<PeerMessage, TransportError> {
        bincode::deserialize(&self.payload).map_err(|e| TransportError::Codec(e.to_string()))
    }
}

/// Routing table shared by every node of a devnet.
#[derive(Debug, Clone, Default)]
pub struct ChannelNetwork {
    routes: Arc<RwLock<HashMap<PeerAddress, UnboundedSender<Envelope>>>>,
}

impl ChannelNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `address` and return its transport and inbox.
    pub fn join(&self, address: PeerAddress) -> (ChannelTransport, UnboundedReceiver<Envelope>) {
        let (tx, rx) = unbounded_channel();
        self.routes.write().insert(address.clone(), tx);
        let transport = ChannelTransport {
            local: address,
            network: self.clone(),
        };
        (transport, rx)
    }

    /// Drop `address` from the routing table. Its inbox closes once every
    /// in-flight sender is gone.
    pub fn leave(&self, address: &PeerAddress) {
        self.routes.write().remove(address);
    }

    /// Every registered address, sorted.
    pub fn peers(&self) -> Vec<PeerAddress> {
        let mut peers: Vec<PeerAddress> = self.routes.read().keys().cloned().collect();
        peers.sort();
        peers
    }

    fn route(&self, address: &PeerAddress) -> Option<UnboundedSender<Envelope>> {
        self.routes.read().get(address).cloned()
    }
}

/// One node's handle on the network.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    local: PeerAddress,
    network: ChannelNetwork,
}

impl ChannelTransport {
    pub fn local_address(&self) -> &PeerAddress {
        &self.local
    }

    /// Every peer except this node.
    pub fn peers(&self) -> Vec<PeerAddress> {
        self.network
            .peers()
            .into_iter()
            .filter(|peer| *peer != self.local)
            .collect()
    }

    /// Send `message` to every peer. Failures are logged and counted.
    pub fn broadcast(&self, message: &PeerMessage) -> SendReport {
        let mut report = SendReport::default();
        for peer in self.peers() {
            match self.direct_message(message.clone(), &peer) {
                Ok(()) => report.sent += 1,
                Err(e) => {
                    warn!(
                        "[runtime] {} failed to broadcast {} to {}: {}",
                        self.local,
                        message.kind(),
                        peer,
                        e
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }
}

impl PeerTransport for ChannelTransport {
    fn direct_message(
        &self,
        message: PeerMessage,
        destination: &PeerAddress,
    ) -> Result<(), TransportError> {
        let payload =
            bincode::serialize(&message).map_err(|e| TransportError::Codec(e.to_string()))?;
        let route = self
            .network
            .route(destination)
            .ok_or_else(|| TransportError::UnknownPeer(destination.clone()))?;
        route
            .send(Envelope {
                from: self.local.clone(),
                payload,
            })
            .map_err(|_| TransportError::Disconnected(destination.clone()))
    }
}
