use anchor_lang::prelude::*;

/// Emitted when the registry is initialized
#[event]
pub struct ProtocolInitialized {
    /// The config PDA address
    pub config: Pubkey,
    /// The admin authority
    pub admin: Pubkey,
    /// Base registration price in lamports
    pub lock_name_price: u64,
    /// Price per name byte in lamports
    pub byte_price: u64,
    /// Lock period in seconds
    pub lock_time: i64,
    /// Unix timestamp of initialization
    pub initialized_at: i64,
}

/// Emitted when a requester commits to a name digest
#[event]
pub struct NameCommitted {
    /// The PDA address of the Commitment account
    pub commitment: Pubkey,
    /// Who committed
    pub requester: Pubkey,
    /// The committed name digest
    pub hash: [u8; 32],
    /// Unix timestamp of the commitment
    pub committed_at: i64,
}

/// Emitted when a name is registered through a revealed commitment
#[event]
pub struct NameRegistered {
    /// The PDA address of the NameRecord account
    pub name_record: Pubkey,
    /// The raw name bytes
    pub name: Vec<u8>,
    /// New owner of the name
    pub owner: Pubkey,
    /// Owner whose expired lock was replaced (None for a first registration)
    pub previous_owner: Option<Pubkey>,
    /// Lamports kept by the registry
    pub price_paid: u64,
    /// Lamports returned for overpayment
    pub refund: u64,
    /// Unix timestamp of registration
    pub registered_at: i64,
    /// Unix timestamp when the lock ends
    pub locked_until: i64,
}

/// Emitted when the admin changes the base registration price
#[event]
pub struct LockNamePriceUpdated {
    pub admin: Pubkey,
    pub old_price: u64,
    pub new_price: u64,
    pub updated_at: i64,
}
