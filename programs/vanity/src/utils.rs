use solana_sha256_hasher::hash;
use crate::NAME_HASH_BYTES;

/// Digest of a candidate name, used both as the commitment value and as the
/// name record PDA seed
pub type NameHash = [u8; NAME_HASH_BYTES];

/// SHA-256 of the raw name bytes
/// Independent of who asks, so two requesters committing to the same name
/// produce the same digest. No validation is done here.
pub fn name_hash(name: &[u8]) -> NameHash {
    hash(name).to_bytes()
}
