//! # BD-03 Node State Benchmarks
//!
//! Block application end to end: consensus check, index mutation, pool
//! purge, optional index verification and the chain append.

use bd_02_consensus_gate::{
    AuthorityRegistry, ConsensusGate, ConsensusGateApi, RoundRobinSchedule, SlotConfig,
    SlotLeaderOracle,
};
use bd_03_node_state::{NodeState, NodeStateConfig};
use criterion::{black_box, BatchSize, BenchmarkId, Criterion, Throughput};
use shared_types::{Block, Transaction};
use std::sync::Arc;

const PRODUCER: [u8; 32] = [1u8; 32];

fn node(verify_index_on_apply: bool) -> NodeState {
    let authorities = AuthorityRegistry::new([PRODUCER]);
    let oracle: Arc<dyn SlotLeaderOracle> = Arc::new(RoundRobinSchedule::new(authorities.clone()));
    let gate: Arc<dyn ConsensusGateApi> = Arc::new(
        ConsensusGate::new(SlotConfig::for_testing(), authorities, oracle)
            .expect("testing slot config is valid"),
    );
    NodeState::new(NodeStateConfig { verify_index_on_apply }, gate)
}

fn registrations(from: u64, count: u64) -> Vec<Transaction> {
    (from..from + count)
        .map(|tid| Transaction::register(tid, format!("apply{tid}.bdns"), "10.0.0.1", PRODUCER, 1))
        .collect()
}

/// A node holding `names` registrations, and a block with `batch` more.
fn prepared(names: u64, batch: u64, verify: bool) -> (NodeState, Block) {
    let state = node(verify);
    let genesis = Block::genesis(0, PRODUCER, registrations(0, names));
    state.apply_block(genesis.clone()).expect("genesis applies");
    let next = Block::child_of(&genesis, 1, PRODUCER, registrations(names, batch));
    (state, next)
}

pub fn bench_apply_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-03-apply-block");

    for batch in [10u64, 100, 1_000] {
        group.throughput(Throughput::Elements(batch));
        for verify in [false, true] {
            let label = if verify { "verified" } else { "unverified" };
            group.bench_with_input(BenchmarkId::new(label, batch), &batch, |b, &batch| {
                b.iter_batched(
                    || prepared(10_000, batch, verify),
                    |(state, block)| black_box(state.apply_block(block).is_ok()),
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

pub fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-03-resolve");
    let (state, _) = prepared(10_000, 0, false);

    group.bench_function("hit", |b| {
        b.iter(|| black_box(state.resolve("apply5000.bdns")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| black_box(state.resolve("absent.bdns")))
    });
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_apply_block(c);
    bench_resolve(c);
}
