use anchor_lang::prelude::*;

#[error_code]
pub enum VanityError {
    #[msg("Name is shorter than the minimum length")]
    NameTooShort,

    #[msg("Name is longer than the maximum length")]
    NameTooLong,

    #[msg("No matured pre-registration matches this name")]
    NoAvailablePreRegister,

    #[msg("Name is locked by its current owner")]
    NameNotAvailable,

    #[msg("Insufficient payment for registration")]
    InsufficientAmount,

    #[msg("Unauthorized: only the admin can perform this action")]
    Unauthorized,

    #[msg("Lamport transfer failed")]
    TransferFailure,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}
