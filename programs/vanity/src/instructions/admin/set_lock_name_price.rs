use anchor_lang::prelude::*;
use crate::{Config, LockNamePriceUpdated, VanityError};

#[derive(Accounts)]
pub struct SetLockNamePrice<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
        has_one = admin @ VanityError::Unauthorized,
    )]
    pub config: Account<'info, Config>,
}

/// Takes effect for every price computed after this instruction; names
/// already registered keep what they paid.
pub fn handler(ctx: Context<SetLockNamePrice>, new_price: u64) -> Result<()> {
    let clock = Clock::get()?;
    let config = &mut ctx.accounts.config;

    let old_price = config.lock_name_price;
    config.lock_name_price = new_price;

    emit!(LockNamePriceUpdated {
        admin: config.admin,
        old_price,
        new_price,
        updated_at: clock.unix_timestamp,
    });

    Ok(())
}
