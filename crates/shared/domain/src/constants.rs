//! Domain-level constants.
//!
//! These constants define business rules for credential handling.

// =============================================================================
// Password Hashing
// =============================================================================

/// Default Argon2 time cost (number of passes) applied when hashing passwords
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 12;

/// Lowest accepted Argon2 time cost
pub const MIN_PASSWORD_HASH_COST: u32 = 1;
