//! # Domain Layer
//!
//! Pure tree logic for the Name Index. No I/O, no locking: callers provide
//! exclusive access (`&mut`) for every mutation.

mod digest;
mod errors;
mod node;
mod tree;
mod value_objects;

pub use digest::*;
pub use errors::*;
pub use tree::*;
pub use value_objects::*;
