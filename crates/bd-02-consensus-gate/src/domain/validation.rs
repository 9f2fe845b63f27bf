//! Block validators
//!
//! Both validators are pure: they inspect the candidate block, the current
//! tip and the expected leader, and never touch node state.

use super::authority::AuthorityRegistry;
use super::error::{ConsensusError, ConsensusResult};
use shared_types::{short_id, AuthorityId, Block, ZERO_HASH};

/// Validate the first block of a chain.
///
/// Checks, in order: index is 0, `prev_hash` is zero, the producer is a
/// registered authority, the producer is the expected leader.
pub fn validate_genesis(
    block: &Block,
    authorities: &AuthorityRegistry,
    expected_leader: &AuthorityId,
) -> ConsensusResult<()> {
    if block.index != 0 {
        return Err(ConsensusError::InvalidIndex {
            expected: 0,
            actual: block.index,
        });
    }
    if block.prev_hash != ZERO_HASH {
        return Err(ConsensusError::GenesisWithParent);
    }
    if !authorities.contains(&block.producer) {
        return Err(ConsensusError::UnknownAuthority(short_id(&block.producer)));
    }
    if block.producer != *expected_leader {
        return Err(ConsensusError::not_leader(expected_leader, &block.producer));
    }
    Ok(())
}

/// Validate a block that extends `tip`.
///
/// Checks, in order: index is `tip.index + 1`, `prev_hash` is the tip's
/// hash, the producer is the expected leader, the timestamp is strictly
/// after the tip's.
pub fn validate_block(
    block: &Block,
    tip: &Block,
    expected_leader: &AuthorityId,
) -> ConsensusResult<()> {
    let expected_index = tip.index + 1;
    if block.index != expected_index {
        return Err(ConsensusError::InvalidIndex {
            expected: expected_index,
            actual: block.index,
        });
    }

    let tip_hash = tip.hash();
    if block.prev_hash != tip_hash {
        return Err(ConsensusError::prev_hash_mismatch(&tip_hash, &block.prev_hash));
    }

    if block.producer != *expected_leader {
        return Err(ConsensusError::not_leader(expected_leader, &block.producer));
    }

    if block.timestamp <= tip.timestamp {
        return Err(ConsensusError::InvalidTimestamp {
            block: block.timestamp,
            parent: tip.timestamp,
        });
    }
    Ok(())
}
