//! # Registration Flows
//!
//! Names moving through the whole pipeline on a three-authority network:
//!
//! ```text
//! client ──TRANSACTION──→ [pool] ──leader's block──→ [consensus gate]
//!                                                          │
//!                                                          ↓
//!                                  [name index] ←── apply_block ──→ [chain]
//! ```
//!
//! Leaders under the testing slot config: epoch 0 (t=0,1) is `n0`, epoch 1
//! (t=2,3) is `n1`, epoch 2 (t=4,5) is `n2`, epoch 3 (t=6,7) is `n0` again.

use super::harness::{authority, TestNetwork};
use bd_01_name_index::SENTINEL_DIGEST;
use bd_04_peer_sync::{PeerMessage, SyncConfig};
use shared_types::{Block, Transaction};

const OWNER: [u8; 32] = [0xA1; 32];

fn bootstrapped() -> TestNetwork {
    let network = TestNetwork::new(3, SyncConfig::for_testing());
    network.produce_and_deliver(0);
    assert!(network.converged());
    network
}

// =============================================================================
// HAPPY PATH
// =============================================================================

#[test]
fn test_register_update_revoke_lifecycle() {
    let network = bootstrapped();

    network.submit(0, Transaction::register(1, "alice.bdns", "192.168.1.10", OWNER, 1));
    network.deliver();
    let block = network.produce_and_deliver(2);
    assert_eq!(block.producer, authority(1));
    assert!(network.converged());
    for node in &network.nodes {
        let record = node.state.resolve("alice.bdns").unwrap();
        assert_eq!(record.resolution(), "192.168.1.10");
        assert_eq!(record.block_index, 1);
        assert_eq!(node.state.pending_count(), 0);
    }

    network.submit(2, Transaction::update(2, "alice.bdns", "192.168.1.20", OWNER, 3));
    network.deliver();
    network.produce_and_deliver(4);
    for node in &network.nodes {
        assert_eq!(
            node.state.resolve("alice.bdns").unwrap().resolution(),
            "192.168.1.20"
        );
    }

    network.submit(1, Transaction::revoke(3, "alice.bdns", OWNER, 5));
    network.deliver();
    network.produce_and_deliver(6);
    assert!(network.converged());
    for node in &network.nodes {
        assert!(node.state.resolve("alice.bdns").is_none());
        assert_eq!(node.state.index_digest(), SENTINEL_DIGEST);
        assert_eq!(node.state.tip_height(), Some(3));
    }
}

#[test]
fn test_many_names_in_one_block() {
    let network = bootstrapped();
    for tid in 1..=50u64 {
        network.submit(
            (tid % 3) as usize,
            Transaction::register(tid, format!("host{tid}.bdns"), format!("10.0.0.{tid}"), OWNER, 1),
        );
    }
    network.deliver();

    let block = network.produce_and_deliver(2);
    assert_eq!(block.transactions.len(), 50);
    assert_eq!(
        block.transaction_ids().collect::<Vec<_>>(),
        (1..=50).collect::<Vec<_>>()
    );
    assert!(network.converged());
    for node in &network.nodes {
        assert_eq!(node.state.verify_index().unwrap().len, 50);
    }
}

// =============================================================================
// POOL BEHAVIOUR
// =============================================================================

#[test]
fn test_unrelayed_transaction_waits_for_data_request() {
    let network = bootstrapped();

    // Only n0 hears about it.
    network
        .node(0)
        .state
        .submit_transaction(Transaction::register(7, "bob.bdns", "10.7.7.7", OWNER, 1));

    let empty = network.produce_and_deliver(2);
    assert!(empty.transactions.is_empty());
    assert_eq!(network.node(0).state.pending_count(), 1);

    // The epoch-1 leader pulls n0's pool.
    let n0 = network.node(0).address.clone();
    network.node(1).send(PeerMessage::GetData, &n0);
    network.deliver();
    assert_eq!(network.node(1).state.pending_count(), 1);

    let block = network.produce_and_deliver(3);
    assert_eq!(block.transaction_ids().collect::<Vec<_>>(), vec![7]);
    assert_eq!(network.node(0).state.pending_count(), 0);
    assert!(network.node(2).state.resolve("bob.bdns").is_some());
}

// =============================================================================
// REJECTION
// =============================================================================

#[test]
fn test_block_from_wrong_leader_is_dropped_everywhere() {
    let network = bootstrapped();
    let genesis = network.node(0).state.latest_block().unwrap();

    // n2 signs for epoch 1, which n1 leads.
    let rogue = Block::child_of(
        &genesis,
        2,
        authority(2),
        vec![Transaction::register(9, "evil.bdns", "6.6.6.6", OWNER, 1)],
    );
    network.broadcast(2, PeerMessage::Block(rogue));
    network.deliver();

    for node in &network.nodes {
        assert_eq!(node.state.tip_height(), Some(0));
        assert!(node.state.resolve("evil.bdns").is_none());
        assert!(!node.state.is_quarantined());
    }

    // The real leader still extends genesis.
    let block = network.produce_and_deliver(2);
    assert_eq!(block.index, 1);
    assert!(network.converged());
}

#[test]
fn test_second_block_at_same_height_is_skipped() {
    let network = bootstrapped();
    let first = network.produce_and_deliver(2);

    // A sibling of `first`, arriving late.
    let genesis = network.node(2).state.blocks_from(0).remove(0);
    let sibling = Block::child_of(
        &genesis,
        3,
        authority(1),
        vec![Transaction::register(4, "late.bdns", "10.4.4.4", OWNER, 2)],
    );
    network.broadcast(1, PeerMessage::Block(sibling));
    network.deliver();

    for node in &network.nodes {
        assert_eq!(node.state.latest_block().unwrap(), first);
        assert!(node.state.resolve("late.bdns").is_none());
    }
}
