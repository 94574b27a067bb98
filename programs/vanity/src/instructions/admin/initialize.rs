use anchor_lang::prelude::*;
use crate::{Config, ProtocolInitialized};

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Payer for account initialization (can be same as admin).
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Admin authority who will be allowed to change the lock name price.
    /// Must sign to prove consent to being the admin.
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Config::INIT_SPACE,
        seeds = [Config::SEED_PREFIX],
        bump
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let clock = Clock::get()?;
    let admin = ctx.accounts.admin.key();

    ctx.accounts
        .config
        .set_inner(Config::with_defaults(admin, ctx.bumps.config));

    let config = &ctx.accounts.config;
    emit!(ProtocolInitialized {
        config: config.key(),
        admin,
        lock_name_price: config.lock_name_price,
        byte_price: config.byte_price,
        lock_time: config.lock_time,
        initialized_at: clock.unix_timestamp,
    });

    Ok(())
}
