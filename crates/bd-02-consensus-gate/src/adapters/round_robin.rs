//! Round-robin leader schedule over the authority registry

use crate::domain::{AuthorityRegistry, Epoch};
use crate::ports::SlotLeaderOracle;
use shared_types::AuthorityId;

/// Epoch `e` is led by `authorities[e % n]` in sorted registry order.
#[derive(Debug, Clone)]
pub struct RoundRobinSchedule {
    authorities: AuthorityRegistry,
}

impl RoundRobinSchedule {
    pub fn new(authorities: AuthorityRegistry) -> Self {
        Self { authorities }
    }

    pub fn authorities(&self) -> &AuthorityRegistry {
        &self.authorities
    }
}

impl SlotLeaderOracle for RoundRobinSchedule {
    fn slot_leader(&self, epoch: Epoch) -> Option<AuthorityId> {
        let n = self.authorities.len() as u64;
        if n == 0 {
            return None;
        }
        self.authorities.get((epoch % n) as usize).copied()
    }
}
