//! Domain layer for the node state.

mod config;
mod errors;
mod pool;
mod registry;

pub use config::*;
pub use errors::*;
pub use pool::*;
pub use registry::*;
