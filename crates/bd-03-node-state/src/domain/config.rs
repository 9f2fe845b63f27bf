//! Node state configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeStateConfig {
    /// Run a full structural check of the index after every applied block.
    /// A failed check quarantines the node.
    pub verify_index_on_apply: bool,
}

impl NodeStateConfig {
    pub fn for_testing() -> Self {
        Self {
            verify_index_on_apply: true,
        }
    }
}
