//! # BDNS Benchmarks
//!
//! Criterion benchmarks per subsystem, registered by
//! `benches/subsystem_benchmarks.rs`.

pub mod bd_01_name_index;
pub mod bd_03_node_state;
