//! # Ports Layer
//!
//! The Name Index has no outbound dependencies; it only exposes a driving
//! port consumed by the node state.

pub mod inbound;

pub use inbound::*;
