use anchor_lang::prelude::*;
use crate::{name_hash, NameHash};

/// No accounts: the digest depends on the name alone
#[derive(Accounts)]
pub struct GetPreRegisterHash {}

pub fn handler(_ctx: Context<GetPreRegisterHash>, name: Vec<u8>) -> Result<NameHash> {
    Ok(name_hash(&name))
}
