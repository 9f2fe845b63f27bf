//! # Adapters
//!
//! Outbound port implementations used by the runtime.

pub mod channel_transport;

pub use channel_transport::{ChannelNetwork, ChannelTransport, Envelope};
