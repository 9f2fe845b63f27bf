//! Domain layer for peer sync: wire messages, configuration, errors.

mod config;
mod errors;
mod messages;

pub use config::*;
pub use errors::*;
pub use messages::*;
