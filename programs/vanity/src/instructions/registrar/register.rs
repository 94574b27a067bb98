use anchor_lang::prelude::*;
use crate::{
    name_hash, Commitment, Config, NameRecord, NameRegistered, VanityError, MAX_NAME_LENGTH,
    MIN_NAME_LENGTH,
};
use super::helpers::{
    apply_registration, claimed_record, collect_payment, load_commitment, plan_registration,
    NameAssignment, RegistrationAccounts,
};

/// Reveal a committed name and take it for `lock_time` seconds
#[derive(Accounts)]
#[instruction(name: Vec<u8>)]
pub struct Register<'info> {
    /// Length is checked here so a bad name fails before name_record is created
    #[account(
        mut,
        constraint = name.len() >= MIN_NAME_LENGTH @ VanityError::NameTooShort,
        constraint = name.len() <= MAX_NAME_LENGTH @ VanityError::NameTooLong,
    )]
    pub registrant: Signer<'info>,

    /// Config also holds registration payments
    #[account(
        mut,
        seeds = [Config::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, Config>,

    /// CHECK: The registrant's commitment PDA. It may not exist, in which case
    /// the reveal is rejected in the handler rather than by deserialization.
    #[account(
        mut,
        seeds = [Commitment::SEED_PREFIX, registrant.key().as_ref()],
        bump,
    )]
    pub commitment: UncheckedAccount<'info>,

    /// Created on first registration, reused when an expired name is retaken
    #[account(
        init_if_needed,
        payer = registrant,
        space = 8 + NameRecord::INIT_SPACE,
        seeds = [NameRecord::SEED_PREFIX, name_hash(&name).as_ref()],
        bump
    )]
    pub name_record: Account<'info, NameRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Register>, name: Vec<u8>, payment: u64) -> Result<()> {
    let clock = Clock::get()?;
    let registrant = ctx.accounts.registrant.key();

    // Decide everything before moving lamports or writing state
    let commitment = load_commitment(&ctx.accounts.commitment);
    let existing = claimed_record(&ctx.accounts.name_record);
    let previous_owner = existing.map(|record| record.owner);

    let plan = plan_registration(
        &ctx.accounts.config,
        commitment.as_ref(),
        existing,
        &registrant,
        &name,
        payment,
        clock.unix_timestamp,
    )?;

    let registrant_info = ctx.accounts.registrant.to_account_info();
    let vault_info = ctx.accounts.config.to_account_info();
    let commitment_info = ctx.accounts.commitment.to_account_info();

    collect_payment(
        &registrant_info,
        &vault_info,
        &ctx.accounts.system_program.to_account_info(),
        payment,
    )?;

    apply_registration(
        &mut ctx.accounts.config,
        &mut ctx.accounts.name_record,
        RegistrationAccounts {
            registrant: &registrant_info,
            vault: &vault_info,
            commitment: &commitment_info,
        },
        &plan,
        NameAssignment {
            name: name.clone(),
            owner: registrant,
            current_time: clock.unix_timestamp,
            locked_until: plan.locked_until,
            bump: ctx.bumps.name_record,
        },
    )?;

    emit!(NameRegistered {
        name_record: ctx.accounts.name_record.key(),
        name,
        owner: registrant,
        previous_owner,
        price_paid: plan.settlement.price,
        refund: plan.settlement.refund,
        registered_at: clock.unix_timestamp,
        locked_until: plan.locked_until,
    });

    Ok(())
}
