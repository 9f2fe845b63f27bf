//! # Node Configuration
//!
//! Unified configuration for every subsystem and the devnet runtime.
//!
//! ## Sources
//!
//! Applied in order, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. JSON file named by `BDNS_CONFIG` (any subset of fields)
//! 3. Environment overrides: `BDNS_NODE_COUNT`, `BDNS_SLOT_INTERVAL`,
//!    `BDNS_SLOTS_PER_EPOCH`, `BDNS_BLOCK_LOOKBACK`

use bd_02_consensus_gate::{ConsensusError, SlotConfig};
use bd_03_node_state::NodeStateConfig;
use bd_04_peer_sync::SyncConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the JSON config file.
pub const CONFIG_FILE_VAR: &str = "BDNS_CONFIG";

/// Complete node configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Slot timing.
    pub slots: SlotConfig,
    /// Block application.
    pub state: NodeStateConfig,
    /// Peer sync handlers.
    pub sync: SyncConfig,
    /// In-process network.
    pub devnet: DevnetConfig,
}

/// Devnet runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevnetConfig {
    /// Number of authority nodes.
    pub node_count: usize,
    /// Upper bound on transactions per produced block.
    pub max_txs_per_block: usize,
    /// Names registered in the genesis block.
    pub genesis_records: Vec<GenesisRecord>,
}

/// A name registered at genesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisRecord {
    pub domain_name: String,
    pub resolution: String,
}

impl Default for DevnetConfig {
    fn default() -> Self {
        Self {
            node_count: 3,
            max_txs_per_block: 100,
            genesis_records: Vec::new(),
        }
    }
}

impl NodeConfig {
    /// Fixed timing from t=0, four nodes, verification on every block.
    pub fn for_testing() -> Self {
        Self {
            slots: SlotConfig::for_testing(),
            state: NodeStateConfig::for_testing(),
            sync: SyncConfig::for_testing(),
            devnet: DevnetConfig {
                node_count: 4,
                max_txs_per_block: 10,
                genesis_records: Vec::new(),
            },
        }
    }

    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var_os(CONFIG_FILE_VAR).map(PathBuf::from);
        Self::from_sources(file.as_deref(), |name| std::env::var(name).ok())
    }

    /// Load from an optional JSON file and an environment lookup.
    pub fn from_sources(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(n) = parse_var(&env, "BDNS_NODE_COUNT")? {
            self.devnet.node_count = n;
        }
        if let Some(secs) = parse_var(&env, "BDNS_SLOT_INTERVAL")? {
            self.slots.slot_interval_secs = secs;
        }
        if let Some(slots) = parse_var(&env, "BDNS_SLOTS_PER_EPOCH")? {
            self.slots.slots_per_epoch = slots;
        }
        if let Some(k) = parse_var(&env, "BDNS_BLOCK_LOOKBACK")? {
            self.sync.block_lookback = k;
        }
        Ok(())
    }

    /// Reject configurations no devnet can run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.devnet.node_count == 0 {
            return Err(ConfigError::NoNodes);
        }
        if self.devnet.max_txs_per_block == 0 {
            return Err(ConfigError::EmptyBlocks);
        }
        self.slots.validate()?;
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    env: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match env(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidVar { name, value }),
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid value {value:?} for {name}")]
    InvalidVar { name: &'static str, value: String },

    #[error("Devnet needs at least one node")]
    NoNodes,

    #[error("max_txs_per_block must be positive")]
    EmptyBlocks,

    #[error(transparent)]
    Slots(#[from] ConsensusError),
}
