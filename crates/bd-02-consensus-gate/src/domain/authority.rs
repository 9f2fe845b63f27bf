//! Authority registry

use serde::{Deserialize, Serialize};
use shared_types::AuthorityId;

/// The set of identities allowed to produce blocks, kept sorted and
/// deduplicated so every node derives the same leader schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRegistry {
    authorities: Vec<AuthorityId>,
}

impl AuthorityRegistry {
    pub fn new(authorities: impl IntoIterator<Item = AuthorityId>) -> Self {
        let mut authorities: Vec<AuthorityId> = authorities.into_iter().collect();
        authorities.sort_unstable();
        authorities.dedup();
        Self { authorities }
    }

    pub fn contains(&self, id: &AuthorityId) -> bool {
        self.authorities.binary_search(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.authorities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&AuthorityId> {
        self.authorities.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AuthorityId> {
        self.authorities.iter()
    }
}
