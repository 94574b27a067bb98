use anchor_lang::prelude::*;
use crate::{NameHash, MIN_COMMITMENT_AGE_SECONDS};

/// A requester's pending, not yet revealed claim to a name
/// PDA seeds: ["commit", requester]
/// One per requester; committing again overwrites it.
#[account]
#[derive(InitSpace)]
pub struct Commitment {
    /// The requester who made this commitment
    pub requester: Pubkey,

    /// SHA-256 of the candidate name
    pub hash: [u8; 32],

    /// Unix timestamp when the commitment was recorded
    pub timestamp: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl Commitment {
    pub const SEED_PREFIX: &'static [u8] = b"commit";

    /// Seconds elapsed since the commitment was recorded
    pub fn age(&self, current_time: i64) -> i64 {
        current_time.saturating_sub(self.timestamp)
    }

    /// Check if the commitment is old enough to be revealed
    pub fn is_mature(&self, current_time: i64) -> bool {
        self.age(current_time) >= MIN_COMMITMENT_AGE_SECONDS
    }

    /// Check if the commitment was made for this name digest
    pub fn matches(&self, hash: &NameHash) -> bool {
        self.hash == *hash
    }
}
