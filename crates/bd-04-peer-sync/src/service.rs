//! # Sync Service
//!
//! Every handler follows the same shape: read a snapshot through the
//! `ChainReader` (which takes and releases the node's locks), then send the
//! snapshot message by message.

use crate::domain::{PeerMessage, SyncConfig};
use crate::ports::{ChainReader, PeerTransport, SyncApi};
use shared_types::PeerAddress;
use std::sync::Arc;
use tracing::{info, warn};

/// Outcome of one handler call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
    pub sent: usize,
    pub failed: usize,
}

pub struct SyncService {
    config: SyncConfig,
    reader: Arc<dyn ChainReader>,
    transport: Arc<dyn PeerTransport>,
}

impl SyncService {
    pub fn new(
        config: SyncConfig,
        reader: Arc<dyn ChainReader>,
        transport: Arc<dyn PeerTransport>,
    ) -> Self {
        Self {
            config,
            reader,
            transport,
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    fn send_all(
        &self,
        peer: &PeerAddress,
        messages: impl IntoIterator<Item = PeerMessage>,
    ) -> SendReport {
        let mut report = SendReport::default();
        for message in messages {
            let kind = message.kind();
            match self.transport.direct_message(message, peer) {
                Ok(()) => report.sent += 1,
                Err(e) => {
                    warn!("[bd-04] Failed to send {} to {}: {}", kind, peer, e);
                    report.failed += 1;
                }
            }
        }
        report
    }
}

impl SyncApi for SyncService {
    fn handle_inventory(&self, peer: &PeerAddress) -> SendReport {
        let height = self.reader.tip_height().unwrap_or(0);
        let report = self.send_all(peer, [PeerMessage::GetBlock { height }]);
        info!("[bd-04] INV from {}: requested blocks at height {}", peer, height);
        report
    }

    fn handle_data_request(&self, peer: &PeerAddress) -> SendReport {
        let pending = self.reader.pending_transactions();
        let report = self.send_all(peer, pending.into_iter().map(PeerMessage::Transaction));
        info!(
            "[bd-04] GETDATA from {}: sent {} pending transactions",
            peer, report.sent
        );
        report
    }

    fn handle_block_request(&self, peer: &PeerAddress) -> SendReport {
        let Some(tip) = self.reader.tip_height() else {
            info!("[bd-04] GETBLOCK from {}: chain empty", peer);
            return SendReport::default();
        };
        let start = tip.saturating_sub(self.config.block_lookback);
        let blocks = self.reader.blocks_from(start);
        let report = self.send_all(peer, blocks.into_iter().map(PeerMessage::Block));
        info!(
            "[bd-04] GETBLOCK from {}: sent {} blocks from {}",
            peer, report.sent, start
        );
        report
    }

    fn handle_block_request_from(&self, peer: &PeerAddress, height: u64) -> SendReport {
        let blocks = self.reader.blocks_from(height);
        let report = self.send_all(peer, blocks.into_iter().map(PeerMessage::Block));
        info!(
            "[bd-04] GETBLOCK {{ height: {} }} from {}: sent {} blocks",
            height, peer, report.sent
        );
        report
    }

    fn handle_proof_request(&self, peer: &PeerAddress) -> SendReport {
        let Some(latest) = self.reader.latest_block() else {
            info!("[bd-04] PROOF from {}: chain empty", peer);
            return SendReport::default();
        };
        let index = latest.index;
        let report = self.send_all(peer, [PeerMessage::Block(latest)]);
        info!("[bd-04] PROOF from {}: sent block {}", peer, index);
        report
    }
}
