//! # BDNS Test Suite
//!
//! Unified test crate exercising the subsystems together, without the
//! async runtime.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! │   ├── bd_01_name_index.rs
//! │   └── bd_03_node_state.rs
//! │
//! └── integration/      # Cross-subsystem flows
//!     ├── harness.rs    # Synchronous multi-node network
//!     ├── flows.rs      # Registration lifecycle through node state
//!     └── sync_flows.rs # Peer sync between nodes
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bd-tests
//!
//! # By category
//! cargo test -p bd-tests integration::
//!
//! # Benchmarks
//! cargo bench -p bd-tests
//! ```

pub mod benchmarks;
pub mod integration;
