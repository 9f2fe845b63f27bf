//! Driving ports (Inbound API)

use crate::service::SendReport;
use shared_types::PeerAddress;

/// Request handlers. Each sends its response to `peer` and reports how many
/// messages went out.
pub trait SyncApi: Send + Sync {
    /// Reply to `Inv` with `GetBlock { height }` carrying the local tip
    /// height (0 for an empty chain).
    fn handle_inventory(&self, peer: &PeerAddress) -> SendReport;

    /// Reply to `GetData` with every pending transaction.
    fn handle_data_request(&self, peer: &PeerAddress) -> SendReport;

    /// Reply to `GetBlock` with the last `block_lookback + 1` blocks.
    fn handle_block_request(&self, peer: &PeerAddress) -> SendReport;

    /// Reply to `GetBlock { height }` with blocks `height..=tip`.
    fn handle_block_request_from(&self, peer: &PeerAddress, height: u64) -> SendReport;

    /// Reply to `ProofRequest` with the latest block.
    fn handle_proof_request(&self, peer: &PeerAddress) -> SendReport;
}
