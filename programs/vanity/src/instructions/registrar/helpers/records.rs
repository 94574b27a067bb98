use anchor_lang::prelude::*;
use crate::{Commitment, NameHash, NameRecord};
use super::payment::move_lamports;

/// Data needed to record a commitment
pub struct CommitmentData {
    pub requester: Pubkey,
    pub hash: NameHash,
    pub current_time: i64,
    pub bump: u8,
}

/// Write a commitment, replacing whatever the requester committed before
pub fn record_commitment(commitment: &mut Commitment, data: CommitmentData) {
    commitment.requester = data.requester;
    commitment.hash = data.hash;
    commitment.timestamp = data.current_time;
    commitment.bump = data.bump;
}

/// Data needed to assign a name to a new owner
pub struct NameAssignment {
    pub name: Vec<u8>,
    pub owner: Pubkey,
    pub current_time: i64,
    pub locked_until: i64,
    pub bump: u8,
}

/// Assign a name record, erasing any previous (expired) ownership
pub fn assign_name_record(record: &mut NameRecord, data: NameAssignment) {
    record.name = data.name;
    record.owner = data.owner;
    record.registered_at = data.current_time;
    record.locked_until = data.locked_until;
    record.bump = data.bump;
}

/// Deserialize a program account that may not exist yet
/// Returns None for empty, foreign-owned or undecodable accounts.
pub fn load_optional<T: AccountDeserialize>(info: &AccountInfo) -> Option<T> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return None;
    }

    let data = info.try_borrow_data().ok()?;
    T::try_deserialize(&mut &data[..]).ok()
}

/// Load a requester's commitment, if there is a live one
pub fn load_commitment(info: &AccountInfo) -> Option<Commitment> {
    load_optional(info)
}

/// Load a name record, if the name has ever been registered
pub fn load_name_record(info: &AccountInfo) -> Option<NameRecord> {
    load_optional::<NameRecord>(info).filter(NameRecord::is_claimed)
}

/// The record as a previous registration left it
/// None for the zeroed account `init_if_needed` creates on first registration.
pub fn claimed_record(record: &NameRecord) -> Option<&NameRecord> {
    record.is_claimed().then_some(record)
}

/// Close a program account the way Anchor's `close` constraint does
/// Rent goes to `destination`, then the account is zeroed, handed back to
/// the System Program and shrunk to nothing, so it can be created again
/// later in the same transaction.
pub fn close_account<'info>(
    account: &AccountInfo<'info>,
    destination: &AccountInfo<'info>,
) -> Result<()> {
    move_lamports(account, destination, account.lamports())?;
    account.try_borrow_mut_data()?.fill(0);
    account.assign(&anchor_lang::system_program::ID);
    #[allow(deprecated)]
    account.realloc(0, false)?;

    Ok(())
}

/// Consume a commitment, returning its rent to the requester
pub fn close_commitment<'info>(
    commitment: &AccountInfo<'info>,
    requester: &AccountInfo<'info>,
) -> Result<()> {
    close_account(commitment, requester)
}
