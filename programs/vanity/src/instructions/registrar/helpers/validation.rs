use anchor_lang::prelude::*;
use crate::{
    Commitment, Config, NameHash, NameRecord, VanityError,
    MAX_NAME_LENGTH, MIN_NAME_LENGTH,
};

/// Validate name length: raw bytes, case-sensitive, no normalization
pub fn validate_name_length(name: &[u8]) -> Result<()> {
    require!(name.len() >= MIN_NAME_LENGTH, VanityError::NameTooShort);
    require!(name.len() <= MAX_NAME_LENGTH, VanityError::NameTooLong);

    Ok(())
}

/// Validate the requester holds a matured commitment to this exact name digest
/// Missing, mismatched and immature commitments are indistinguishable to the caller.
pub fn validate_commitment(
    commitment: Option<&Commitment>,
    requester: &Pubkey,
    hash: &NameHash,
    current_time: i64,
) -> Result<()> {
    let commitment = commitment.ok_or(VanityError::NoAvailablePreRegister)?;

    require!(
        commitment.requester == *requester
            && commitment.matches(hash)
            && commitment.is_mature(current_time),
        VanityError::NoAvailablePreRegister
    );

    Ok(())
}

/// Validate name is not held by an unexpired lock
pub fn validate_name_available(record: Option<&NameRecord>, current_time: i64) -> Result<()> {
    require!(
        record.map_or(true, |record| record.is_available(current_time)),
        VanityError::NameNotAvailable
    );

    Ok(())
}

/// Check availability of a name (length is validated first)
pub fn check_name_available(
    name: &[u8],
    record: Option<&NameRecord>,
    current_time: i64,
) -> Result<bool> {
    validate_name_length(name)?;

    Ok(record.map_or(true, |record| record.is_available(current_time)))
}

/// Registration price of a name in lamports (length is validated first)
pub fn calculate_name_price(config: &Config, name: &[u8]) -> Result<u64> {
    validate_name_length(name)?;

    config.calculate_register_price(name.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{name_hash, MIN_COMMITMENT_AGE_SECONDS};

    fn requester() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    fn commitment(name: &[u8], timestamp: i64) -> Commitment {
        Commitment {
            requester: requester(),
            hash: name_hash(name),
            timestamp,
            bump: 255,
        }
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(validate_name_length(b"").unwrap_err(), error!(VanityError::NameTooShort));
        assert_eq!(validate_name_length(b"ab").unwrap_err(), error!(VanityError::NameTooShort));
        assert!(validate_name_length(&[b'a'; MIN_NAME_LENGTH]).is_ok());
        assert!(validate_name_length(&[b'a'; MAX_NAME_LENGTH]).is_ok());
        assert_eq!(
            validate_name_length(&[b'a'; MAX_NAME_LENGTH + 1]).unwrap_err(),
            error!(VanityError::NameTooLong)
        );
        assert_eq!(
            validate_name_length(&[b'a'; 75]).unwrap_err(),
            error!(VanityError::NameTooLong)
        );
    }

    #[test]
    fn length_counts_bytes_not_chars() {
        // Two characters, four bytes
        assert!(validate_name_length("éé".as_bytes()).is_ok());
        assert_eq!(
            validate_name_length("é".as_bytes()).unwrap_err(),
            error!(VanityError::NameTooShort)
        );
    }

    #[test]
    fn missing_commitment_is_rejected() {
        let hash = name_hash(b"sample_name");
        assert_eq!(
            validate_commitment(None, &requester(), &hash, 1_000).unwrap_err(),
            error!(VanityError::NoAvailablePreRegister)
        );
    }

    #[test]
    fn immature_commitment_is_rejected() {
        let commitment = commitment(b"sample_name", 1_000);
        let hash = name_hash(b"sample_name");

        assert_eq!(
            validate_commitment(Some(&commitment), &requester(), &hash, 1_000).unwrap_err(),
            error!(VanityError::NoAvailablePreRegister)
        );
        assert!(validate_commitment(
            Some(&commitment),
            &requester(),
            &hash,
            1_000 + MIN_COMMITMENT_AGE_SECONDS,
        )
        .is_ok());
    }

    #[test]
    fn commitment_for_another_name_is_rejected() {
        let commitment = commitment(b"other_name", 0);
        assert_eq!(
            validate_commitment(Some(&commitment), &requester(), &name_hash(b"sample_name"), 1_000)
                .unwrap_err(),
            error!(VanityError::NoAvailablePreRegister)
        );
    }

    #[test]
    fn commitment_of_another_requester_is_rejected() {
        let commitment = commitment(b"sample_name", 0);
        let stranger = Pubkey::new_from_array([2u8; 32]);
        assert_eq!(
            validate_commitment(Some(&commitment), &stranger, &name_hash(b"sample_name"), 1_000)
                .unwrap_err(),
            error!(VanityError::NoAvailablePreRegister)
        );
    }

    #[test]
    fn availability_checks_length_first() {
        assert_eq!(
            check_name_available(b"ab", None, 0).unwrap_err(),
            error!(VanityError::NameTooShort)
        );
        assert_eq!(
            check_name_available(&[b'x'; 75], None, 0).unwrap_err(),
            error!(VanityError::NameTooLong)
        );
        assert!(check_name_available(b"sample_name", None, 0).unwrap());
    }

    #[test]
    fn locked_record_is_unavailable() {
        let record = NameRecord {
            name: b"sample_name".to_vec(),
            owner: requester(),
            registered_at: 0,
            locked_until: 500,
            bump: 255,
        };
        assert!(!check_name_available(b"sample_name", Some(&record), 500).unwrap());
        assert!(check_name_available(b"sample_name", Some(&record), 501).unwrap());
        assert_eq!(
            validate_name_available(Some(&record), 100).unwrap_err(),
            error!(VanityError::NameNotAvailable)
        );
        assert!(validate_name_available(None, 100).is_ok());
    }

    #[test]
    fn price_validates_length() {
        let config = Config::with_defaults(requester(), 255);
        assert_eq!(calculate_name_price(&config, b"sample_name").unwrap(), 11_100_000);
        assert_eq!(
            calculate_name_price(&config, b"ab").unwrap_err(),
            error!(VanityError::NameTooShort)
        );
    }
}
