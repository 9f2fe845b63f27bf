//! # Integration Tests
//!
//! Several node states joined by a synchronous in-memory network. Messages
//! queue up until `TestNetwork::deliver` drains them, so every test controls
//! exactly when peers see each other's traffic.

#[cfg(test)]
pub(crate) mod harness;

#[cfg(test)]
mod flows;

#[cfg(test)]
mod sync_flows;
