//! # Peer Sync Subsystem (bd-04)
//!
//! Answers peers' requests from the local node state. Handlers only read:
//! they take a snapshot under the narrowest lock, release it, and only then
//! send.
//!
//! ## Message Flow
//!
//! | Request | Response |
//! |---------|----------|
//! | `Inv` | `GetBlock { height: tip }` |
//! | `GetData` | one `Transaction` per pending transaction |
//! | `GetBlock { .. }` | one `Block` per block in `tip - lookback ..= tip` |
//! | `ProofRequest` | the latest `Block`, if any |
//!
//! Send failures are logged and counted, never returned to the peer.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use domain::{MessageKind, PeerMessage, SyncConfig, TransportError};
pub use ports::{ChainReader, PeerTransport, SyncApi};
pub use service::{SendReport, SyncService};
