use anchor_lang::prelude::*;
use crate::Config;
use crate::instructions::registrar::helpers::calculate_name_price;

#[derive(Accounts)]
pub struct GetRegisterPrice<'info> {
    #[account(
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,
}

/// Price in lamports a reveal of `name` has to attach right now
pub fn handler(ctx: Context<GetRegisterPrice>, name: Vec<u8>) -> Result<u64> {
    calculate_name_price(&ctx.accounts.config, &name)
}
