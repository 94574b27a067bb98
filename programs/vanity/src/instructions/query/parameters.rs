use anchor_lang::prelude::*;
use crate::Config;

/// Read-only access to the pricing parameters
#[derive(Accounts)]
pub struct ReadConfig<'info> {
    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

pub fn lock_time(ctx: Context<ReadConfig>) -> Result<i64> {
    Ok(ctx.accounts.config.lock_time)
}

pub fn lock_name_price(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.lock_name_price)
}

pub fn byte_price(ctx: Context<ReadConfig>) -> Result<u64> {
    Ok(ctx.accounts.config.byte_price)
}
