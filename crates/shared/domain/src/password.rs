//! Password hashing - credential protection at rest.
//!
//! `Password` is the value object stored on a user record; `PasswordHasher`
//! is the seam services depend on, with `Argon2Hasher` as the production
//! implementation.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};

use crate::constants::{DEFAULT_PASSWORD_HASH_COST, MIN_PASSWORD_HASH_COST};
use crate::error::{DomainError, DomainResult};

/// Hashed password value object.
///
/// Only ever holds a PHC-formatted hash, never the plain text.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// One-way salted password hashing.
///
/// Hashing is CPU-bound; async callers should run it on a blocking thread.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plain text password with a fresh salt.
    fn hash(&self, plain_text: &str) -> DomainResult<Password>;

    /// Check a plain text password against a stored hash.
    fn verify(&self, plain_text: &str, password: &Password) -> bool;
}

/// Argon2id hasher with a configurable time cost.
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher running `cost` passes over the default memory size.
    ///
    /// # Errors
    /// Returns a validation error if `cost` is below the Argon2 minimum.
    pub fn new(cost: u32) -> DomainResult<Self> {
        if cost < MIN_PASSWORD_HASH_COST {
            return Err(DomainError::validation(format!(
                "Password hash cost must be at least {}",
                MIN_PASSWORD_HASH_COST
            )));
        }

        let params = Params::new(Params::DEFAULT_M_COST, cost, Params::DEFAULT_P_COST, None)
            .map_err(|e| DomainError::validation(format!("Invalid hash parameters: {}", e)))?;

        Ok(Self { params })
    }

    /// Configured time cost.
    pub fn cost(&self) -> u32 {
        self.params.t_cost()
    }

    #[inline]
    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            DEFAULT_PASSWORD_HASH_COST,
            Params::DEFAULT_P_COST,
            None,
        )
        .unwrap_or_default();

        Self { params }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain_text: &str) -> DomainResult<Password> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;

        Ok(Password::from_hash(hash.to_string()))
    }

    fn verify(&self, plain_text: &str, password: &Password) -> bool {
        // Parameters are read back from the PHC string, so hashes made with a
        // different cost still verify.
        match PasswordHash::new(password.as_str()) {
            Ok(parsed) => Argon2::default()
                .verify_password(plain_text.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
