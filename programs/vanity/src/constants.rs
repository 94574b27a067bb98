/// Shortest name that can be registered, in bytes
pub const MIN_NAME_LENGTH: usize = 3;

/// Longest name that can be registered, in bytes
pub const MAX_NAME_LENGTH: usize = 64;

/// Minimum age of a commitment before it can be revealed (5 minutes)
/// A reveal inside this window is rejected, so anyone who sees a revealed
/// name in flight has to commit and wait out the same delay themselves.
pub const MIN_COMMITMENT_AGE_SECONDS: i64 = 5 * 60;

/// How long a registered name stays locked to its owner (90 days)
/// 90 Days * 24 hours * 60 minutes * 60 seconds
pub const DEFAULT_LOCK_TIME_SECONDS: i64 = 90 * 24 * 60 * 60;

/// Base price of a registration in lamports (0.01 SOL = 10,000,000 lamports)
pub const DEFAULT_LOCK_NAME_PRICE_LAMPORTS: u64 = 10_000_000;

/// Price per byte of name in lamports (0.0001 SOL = 100,000 lamports)
pub const DEFAULT_BYTE_PRICE_LAMPORTS: u64 = 100_000;

/// Size of a name digest in bytes (SHA-256)
pub const NAME_HASH_BYTES: usize = 32;
