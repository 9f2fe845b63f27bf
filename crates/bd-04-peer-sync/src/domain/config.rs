//! Sync configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// How many blocks below the tip a block request also returns.
    pub block_lookback: u64,
    /// Answer `GetBlock { height }` from `height` instead of from
    /// `tip - block_lookback`.
    pub honor_requested_height: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            block_lookback: 5,
            honor_requested_height: false,
        }
    }
}

impl SyncConfig {
    pub fn for_testing() -> Self {
        Self {
            block_lookback: 2,
            honor_requested_height: false,
        }
    }
}
