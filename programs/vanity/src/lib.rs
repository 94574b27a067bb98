use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod utils;

pub use constants::*;
pub use state::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use utils::*;

declare_id!("4VEvjFSBTiWNa9ZxhHSvaC7B7EbugYJg8NTCbP1YUNq5");

#[program]
pub mod vanity {
    use super::*;

    /// Initialize the registry with the launch pricing parameters
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::admin::initialize::handler(ctx)
    }

    /// Change the base registration price (admin only)
    pub fn set_lock_name_price(ctx: Context<SetLockNamePrice>, new_price: u64) -> Result<()> {
        instructions::admin::set_lock_name_price::handler(ctx, new_price)
    }

    /// Seconds a registered name stays locked
    pub fn lock_time(ctx: Context<ReadConfig>) -> Result<i64> {
        instructions::query::parameters::lock_time(ctx)
    }

    /// Base registration price in lamports
    pub fn lock_name_price(ctx: Context<ReadConfig>) -> Result<u64> {
        instructions::query::parameters::lock_name_price(ctx)
    }

    /// Price per name byte in lamports
    pub fn byte_price(ctx: Context<ReadConfig>) -> Result<u64> {
        instructions::query::parameters::byte_price(ctx)
    }

    /// Whether `name` can be registered right now
    pub fn is_name_available(ctx: Context<IsNameAvailable>, name: Vec<u8>) -> Result<bool> {
        instructions::query::name_availability::handler(ctx, name)
    }

    /// The digest to commit to before registering `name`
    pub fn get_pre_register_hash(ctx: Context<GetPreRegisterHash>, name: Vec<u8>) -> Result<[u8; 32]> {
        instructions::query::pre_register_hash::handler(ctx, name)
    }

    /// Price in lamports to register `name`
    pub fn get_register_price(ctx: Context<GetRegisterPrice>, name: Vec<u8>) -> Result<u64> {
        instructions::query::register_price::handler(ctx, name)
    }

    /// Commit to a name digest (step one of commit-reveal)
    /// Replaces any earlier commitment by the same requester.
    pub fn pre_register(ctx: Context<PreRegister>, hash: [u8; 32]) -> Result<()> {
        instructions::registrar::pre_register::handler(ctx, hash)
    }

    /// Reveal a committed name and register it (step two of commit-reveal)
    ///
    /// The commitment must match sha256(name) and be at least
    /// MIN_COMMITMENT_AGE_SECONDS old. `payment` lamports are charged and
    /// anything above the price is refunded in the same instruction.
    pub fn register(ctx: Context<Register>, name: Vec<u8>, payment: u64) -> Result<()> {
        instructions::registrar::register::handler(ctx, name, payment)
    }
}
