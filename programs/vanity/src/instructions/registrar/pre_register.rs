use anchor_lang::prelude::*;
use crate::{Commitment, NameCommitted};
use super::helpers::{record_commitment, CommitmentData};

/// Commit to sha256(name) without revealing the name
/// Creates the requester's commitment on first use, overwrites it afterwards.
#[derive(Accounts)]
pub struct PreRegister<'info> {
    /// Requester pays rent for the commitment on first use
    #[account(mut)]
    pub requester: Signer<'info>,

    #[account(
        init_if_needed,
        payer = requester,
        space = 8 + Commitment::INIT_SPACE,
        seeds = [Commitment::SEED_PREFIX, requester.key().as_ref()],
        bump
    )]
    pub commitment: Account<'info, Commitment>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PreRegister>, hash: [u8; 32]) -> Result<()> {
    let clock = Clock::get()?;
    let requester = ctx.accounts.requester.key();

    record_commitment(
        &mut ctx.accounts.commitment,
        CommitmentData {
            requester,
            hash,
            current_time: clock.unix_timestamp,
            bump: ctx.bumps.commitment,
        },
    );

    emit!(NameCommitted {
        commitment: ctx.accounts.commitment.key(),
        requester,
        hash,
        committed_at: clock.unix_timestamp,
    });

    Ok(())
}
