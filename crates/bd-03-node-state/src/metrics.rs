//! # Node State Metrics
//!
//! Prometheus metrics for block application.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! bd-03-node-state = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `bdns_blocks_applied_total` - Counter of applied blocks
//! - `bdns_blocks_rejected_total` - Counter of refused blocks (by reason)
//! - `bdns_transactions_submitted_total` - Counter of pool submissions
//! - `bdns_chain_height` - Index of the chain tip
//! - `bdns_registered_names` - Names currently in the index

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_int_counter, register_int_counter_vec, register_int_gauge, IntCounter,
    IntCounterVec, IntGauge,
};

#[cfg(feature = "metrics")]
lazy_static! {
    pub static ref BLOCKS_APPLIED: IntCounter = register_int_counter!(
        "bdns_blocks_applied_total",
        "Total number of blocks applied to the local chain"
    )
    .expect("Failed to create BLOCKS_APPLIED metric");

    pub static ref BLOCKS_REJECTED: IntCounterVec = register_int_counter_vec!(
        "bdns_blocks_rejected_total",
        "Total number of blocks refused",
        &["reason"]
    )
    .expect("Failed to create BLOCKS_REJECTED metric");

    pub static ref TRANSACTIONS_SUBMITTED: IntCounter = register_int_counter!(
        "bdns_transactions_submitted_total",
        "Total number of transactions submitted to the pool"
    )
    .expect("Failed to create TRANSACTIONS_SUBMITTED metric");

    pub static ref CHAIN_HEIGHT: IntGauge = register_int_gauge!(
        "bdns_chain_height",
        "Index of the local chain tip"
    )
    .expect("Failed to create CHAIN_HEIGHT metric");

    pub static ref REGISTERED_NAMES: IntGauge = register_int_gauge!(
        "bdns_registered_names",
        "Number of names in the local index"
    )
    .expect("Failed to create REGISTERED_NAMES metric");
}

/// Record an applied block and the resulting chain height and index size.
#[cfg(feature = "metrics")]
pub fn record_block_applied(height: u64, names: usize) {
    BLOCKS_APPLIED.inc();
    CHAIN_HEIGHT.set(i64::try_from(height).unwrap_or(i64::MAX));
    REGISTERED_NAMES.set(i64::try_from(names).unwrap_or(i64::MAX));
}

#[cfg(feature = "metrics")]
pub fn record_block_rejected(reason: &str) {
    BLOCKS_REJECTED.with_label_values(&[reason]).inc();
}

#[cfg(feature = "metrics")]
pub fn record_transaction_submitted() {
    TRANSACTIONS_SUBMITTED.inc();
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_block_applied(_height: u64, _names: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_block_rejected(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_transaction_submitted() {}
