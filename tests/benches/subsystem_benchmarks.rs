//! # BDNS Subsystem Benchmarks
//!
//! | Subsystem | Operation | Target |
//! |-----------|-----------|--------|
//! | bd-01 Name Index | search at 100k names | < 10µs |
//! | bd-01 Name Index | digest at 100k names | < 100ms |
//! | bd-03 Node State | apply 1,000-tx block | < 50ms |

use bd_tests::benchmarks::{bd_01_name_index, bd_03_node_state};
use criterion::{criterion_group, criterion_main, Criterion};

fn name_index(c: &mut Criterion) {
    bd_01_name_index::register_benchmarks(c);
}

fn node_state(c: &mut Criterion) {
    bd_03_node_state::register_benchmarks(c);
}

criterion_group!(benches, name_index, node_state);
criterion_main!(benches);
