use anchor_lang::prelude::*;
use crate::{
    VanityError,
    DEFAULT_BYTE_PRICE_LAMPORTS, DEFAULT_LOCK_NAME_PRICE_LAMPORTS, DEFAULT_LOCK_TIME_SECONDS,
};

/// Global config for the name registry
/// PDA seeds: ["config"]
/// Also acts as the vault that registration payments are paid into.
#[account]
#[derive(InitSpace)]
pub struct Config {
    /// Admin authority who can update the lock name price
    pub admin: Pubkey,

    /// Base price of a registration in lamports
    pub lock_name_price: u64,

    /// Price per byte of name in lamports
    pub byte_price: u64,

    /// Seconds a registered name stays locked to its owner
    pub lock_time: i64,

    /// Total number of successful registrations
    pub names_registered: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Reserved for future use
    pub _reserved: [u8; 64],
}

impl Config {
    pub const SEED_PREFIX: &'static [u8] = b"config";

    /// Config with the launch pricing parameters
    pub fn with_defaults(admin: Pubkey, bump: u8) -> Self {
        Self {
            admin,
            lock_name_price: DEFAULT_LOCK_NAME_PRICE_LAMPORTS,
            byte_price: DEFAULT_BYTE_PRICE_LAMPORTS,
            lock_time: DEFAULT_LOCK_TIME_SECONDS,
            names_registered: 0,
            bump,
            _reserved: [0u8; 64],
        }
    }

    /// Price in lamports for a name of `name_len` bytes
    /// lock_name_price + byte_price * name_len
    pub fn calculate_register_price(&self, name_len: usize) -> Result<u64> {
        let name_len = u64::try_from(name_len).map_err(|_| VanityError::ArithmeticOverflow)?;

        self.byte_price
            .checked_mul(name_len)
            .and_then(|bytes_price| bytes_price.checked_add(self.lock_name_price))
            .ok_or_else(|| error!(VanityError::ArithmeticOverflow))
    }

    /// Timestamp until which a name registered at `current_time` stays locked
    pub fn calculate_locked_until(&self, current_time: i64) -> Result<i64> {
        current_time
            .checked_add(self.lock_time)
            .ok_or_else(|| error!(VanityError::ArithmeticOverflow))
    }
}
