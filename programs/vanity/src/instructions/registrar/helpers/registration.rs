use anchor_lang::prelude::*;
use crate::{name_hash, Commitment, Config, NameHash, NameRecord, VanityError};
use super::payment::{refund_excess, settle_payment, Settlement};
use super::records::{assign_name_record, close_commitment, NameAssignment};
use super::validation::{
    calculate_name_price, validate_commitment, validate_name_available, validate_name_length,
};

/// Everything a reveal needs to apply, decided before any state is touched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistrationPlan {
    pub hash: NameHash,
    pub settlement: Settlement,
    pub locked_until: i64,
}

/// Run every reveal check, in order, against the current state
///
/// 1. name length
/// 2. the requester's commitment matches sha256(name) and has matured
/// 3. the name is not under an unexpired lock
/// 4. the payment covers the price
///
/// `record` is None when the name has never been registered.
pub fn plan_registration(
    config: &Config,
    commitment: Option<&Commitment>,
    record: Option<&NameRecord>,
    requester: &Pubkey,
    name: &[u8],
    payment: u64,
    current_time: i64,
) -> Result<RegistrationPlan> {
    validate_name_length(name)?;

    let hash = name_hash(name);
    validate_commitment(commitment, requester, &hash, current_time)?;

    validate_name_available(record, current_time)?;

    let price = calculate_name_price(config, name)?;
    let settlement = settle_payment(price, payment)?;

    let locked_until = config.calculate_locked_until(current_time)?;

    Ok(RegistrationPlan {
        hash,
        settlement,
        locked_until,
    })
}

/// Lamport-holding accounts a registration writes to
pub struct RegistrationAccounts<'a, 'info> {
    pub registrant: &'a AccountInfo<'info>,
    /// Config PDA, already credited with the full payment
    pub vault: &'a AccountInfo<'info>,
    pub commitment: &'a AccountInfo<'info>,
}

/// Write a planned registration once the payment sits in the vault:
/// assign the record, count it, consume the commitment, refund the excess
pub fn apply_registration(
    config: &mut Config,
    record: &mut NameRecord,
    accounts: RegistrationAccounts<'_, '_>,
    plan: &RegistrationPlan,
    assignment: NameAssignment,
) -> Result<()> {
    assign_name_record(record, assignment);

    config.names_registered = config
        .names_registered
        .checked_add(1)
        .ok_or(VanityError::ArithmeticOverflow)?;

    // One-shot: the commitment is spent whether or not there is a refund
    close_commitment(accounts.commitment, accounts.registrant)?;

    refund_excess(accounts.vault, accounts.registrant, plan.settlement.refund)
}
