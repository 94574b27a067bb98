use anchor_lang::prelude::*;
use crate::MAX_NAME_LENGTH;

/// A registered name and the lock that protects it
/// PDA seeds: ["name", sha256(name)]
#[account]
#[derive(InitSpace)]
pub struct NameRecord {
    /// The raw name bytes (case-sensitive, not normalized)
    #[max_len(MAX_NAME_LENGTH)]
    pub name: Vec<u8>,

    /// The requester who holds the name
    pub owner: Pubkey,

    /// Unix timestamp of the registration that set the current lock
    pub registered_at: i64,

    /// Unix timestamp after which the name is available again
    pub locked_until: i64,

    /// PDA bump seed
    pub bump: u8,
}

impl NameRecord {
    pub const SEED_PREFIX: &'static [u8] = b"name";

    /// Check if the lock still holds (nobody, owner included, can register)
    pub fn is_locked(&self, current_time: i64) -> bool {
        current_time <= self.locked_until
    }

    /// Check if anyone can register the name
    pub fn is_available(&self, current_time: i64) -> bool {
        !self.is_locked(current_time)
    }

    /// Check if the record has ever been assigned to an owner
    /// A freshly created account is zeroed and has no owner yet.
    pub fn is_claimed(&self) -> bool {
        self.owner != Pubkey::default()
    }
}
