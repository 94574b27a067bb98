use anchor_lang::prelude::*;
use crate::VanityError;

/// How an attached payment splits between the registry and the payer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Lamports kept by the registry
    pub price: u64,
    /// Lamports returned to the payer
    pub refund: u64,
}

/// Split a payment against a price, rejecting underpayment
pub fn settle_payment(price: u64, payment: u64) -> Result<Settlement> {
    require!(payment >= price, VanityError::InsufficientAmount);

    Ok(Settlement {
        price,
        refund: payment - price,
    })
}

/// Move the full attached payment from the payer into the vault (Config PDA)
pub fn collect_payment<'info>(
    payer: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    anchor_lang::system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            anchor_lang::system_program::Transfer {
                from: payer.clone(),
                to: vault.clone(),
            },
        ),
        amount,
    )
    .map_err(|_| error!(VanityError::TransferFailure))
}

/// Return overpaid lamports from the vault to the payer
/// The vault is program-owned, so lamports are moved directly.
pub fn refund_excess<'info>(
    vault: &AccountInfo<'info>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    move_lamports(vault, recipient, amount)
}

/// Debit `from` and credit `to`, failing instead of underflowing
pub fn move_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let from_balance = from
        .lamports()
        .checked_sub(amount)
        .ok_or(VanityError::TransferFailure)?;
    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(VanityError::TransferFailure)?;

    **from.try_borrow_mut_lamports()? = from_balance;
    **to.try_borrow_mut_lamports()? = to_balance;

    Ok(())
}
