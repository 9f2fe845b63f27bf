//! Domain layer for the consensus gate: slot arithmetic, the authority
//! registry and the two block validators.

mod authority;
mod error;
mod slot;
mod validation;

pub use authority::*;
pub use error::*;
pub use slot::*;
pub use validation::*;
