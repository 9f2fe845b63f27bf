//! # Peer Sync Flows
//!
//! Catch-up between nodes through the sync handlers:
//!
//! ```text
//! [lagging] ──INV──→ [peer]            (or the lagging node announcing itself)
//! [peer] ──GETBLOCK{height}──→ [lagging]
//! [lagging] ──BLOCK × k──→ [peer]
//! ```

use super::harness::TestNetwork;
use bd_04_peer_sync::{PeerMessage, SendReport, SyncApi, SyncConfig};
use shared_types::{PeerAddress, Transaction};

const OWNER: [u8; 32] = [0xB2; 32];

fn legacy() -> SyncConfig {
    SyncConfig::for_testing()
}

fn honoring() -> SyncConfig {
    SyncConfig {
        honor_requested_height: true,
        ..SyncConfig::for_testing()
    }
}

/// Genesis plus one registration per block, up to `height`.
fn chain_of_height(sync: SyncConfig, height: u64) -> TestNetwork {
    let network = TestNetwork::new(3, sync);
    network.produce_and_deliver(0);
    for h in 1..=height {
        let ts = 2 * h;
        network.submit(0, Transaction::register(h, format!("block{h}.bdns"), "10.9.0.1", OWNER, ts - 1));
        network.deliver();
        network.produce_and_deliver(ts);
    }
    assert!(network.converged());
    network
}

// =============================================================================
// OBSERVER CATCH-UP
// =============================================================================

#[test]
fn test_observer_catches_up_from_requested_height() {
    let mut network = chain_of_height(honoring(), 6);
    let observer = network.add_node(PeerAddress::new("observer"), None);
    let n0 = network.node(0).address.clone();

    let report = network.node(observer).sync.handle_inventory(&n0);
    assert_eq!(report, SendReport { sent: 1, failed: 0 });
    network.deliver();

    assert_eq!(network.node(observer).state.tip_height(), Some(6));
    assert!(network.converged());
    assert_eq!(
        network.node(observer).state.resolve("block4.bdns").unwrap().block_index,
        4
    );
}

#[test]
fn test_lookback_window_cannot_bootstrap_a_long_chain() {
    let mut network = chain_of_height(legacy(), 4);
    let observer = network.add_node(PeerAddress::new("observer"), None);
    let n0 = network.node(0).address.clone();

    network.node(observer).sync.handle_inventory(&n0);
    network.deliver();

    // Only blocks 2..=4 arrive, none of which is a genesis.
    assert_eq!(network.node(observer).state.tip_height(), None);
    assert!(!network.node(observer).state.is_quarantined());
}

#[test]
fn test_lookback_window_bootstraps_a_short_chain() {
    let mut network = chain_of_height(legacy(), 2);
    let observer = network.add_node(PeerAddress::new("observer"), None);
    let n1 = network.node(1).address.clone();

    network.node(observer).sync.handle_inventory(&n1);
    network.deliver();

    assert_eq!(network.node(observer).state.tip_height(), Some(2));
    assert!(network.converged());
}

// =============================================================================
// PARTITION RECOVERY
// =============================================================================

#[test]
fn test_partitioned_node_recovers_on_inventory() {
    let network = chain_of_height(legacy(), 0);
    network.partition(2);

    network.submit(1, Transaction::register(1, "missed.bdns", "10.1.2.3", OWNER, 1));
    network.deliver();
    network.produce_and_deliver(2);
    network.produce_and_deliver(3);
    assert_eq!(network.node(2).state.tip_height(), Some(0));

    network.heal(2);
    let n2 = network.node(2).address.clone();
    network.node(1).send(PeerMessage::Inv, &n2);
    network.deliver();

    assert_eq!(network.node(2).state.tip_height(), Some(2));
    assert!(network.node(2).state.resolve("missed.bdns").is_some());
    assert!(network.converged());
}

// =============================================================================
// DIRECT REQUESTS
// =============================================================================

#[test]
fn test_proof_request_delivers_latest_block() {
    let mut network = chain_of_height(legacy(), 0);
    let observer = network.add_node(PeerAddress::new("observer"), None);
    let observer_addr = network.node(observer).address.clone();

    let report = network.node(0).sync.handle_proof_request(&observer_addr);
    assert_eq!(report.sent, 1);
    network.deliver();
    assert_eq!(network.node(observer).state.tip_height(), Some(0));
}

#[test]
fn test_data_request_shares_pool_in_tid_order() {
    let mut network = chain_of_height(legacy(), 0);
    for tid in [30u64, 10, 20] {
        network
            .node(0)
            .state
            .submit_transaction(Transaction::register(tid, format!("p{tid}.bdns"), "10.0.0.1", OWNER, 1));
    }
    let observer = network.add_node(PeerAddress::new("observer"), None);
    let n0 = network.node(0).address.clone();

    network.node(observer).send(PeerMessage::GetData, &n0);
    assert_eq!(network.deliver(), 4);

    let pending = network.node(observer).state.pending_transactions(usize::MAX);
    assert_eq!(
        pending.iter().map(|tx| tx.tid).collect::<Vec<_>>(),
        vec![10, 20, 30]
    );
}

#[test]
fn test_replies_to_unknown_peer_are_counted_as_failures() {
    let network = chain_of_height(legacy(), 1);
    let ghost = PeerAddress::new("ghost");

    assert_eq!(
        network.node(0).sync.handle_block_request(&ghost),
        SendReport { sent: 0, failed: 2 }
    );
    assert_eq!(
        network.node(0).sync.handle_proof_request(&ghost),
        SendReport { sent: 0, failed: 1 }
    );
}
