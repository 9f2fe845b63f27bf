//! # Handlers
//!
//! - `inbound`: routes every received peer message to the node state or
//!   the sync service
//! - `producer`: builds and broadcasts a block each slot the node leads

pub mod inbound;
pub mod producer;

pub use inbound::{Dispatch, InboundHandler};
pub use producer::BlockProducer;
