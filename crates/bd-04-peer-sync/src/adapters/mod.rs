//! Adapters layer

mod node_state;
