use anchor_lang::prelude::*;
use crate::{name_hash, NameRecord};
use crate::instructions::registrar::helpers::{check_name_available, load_name_record};

#[derive(Accounts)]
#[instruction(name: Vec<u8>)]
pub struct IsNameAvailable<'info> {
    /// CHECK: The name record PDA; an account that was never created means
    /// the name was never registered.
    #[account(
        seeds = [NameRecord::SEED_PREFIX, name_hash(&name).as_ref()],
        bump,
    )]
    pub name_record: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<IsNameAvailable>, name: Vec<u8>) -> Result<bool> {
    let clock = Clock::get()?;
    let record = load_name_record(&ctx.accounts.name_record);

    check_name_available(&name, record.as_ref(), clock.unix_timestamp)
}
