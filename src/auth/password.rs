use std::fmt;

use crate::error::{AppError, Result};

/// bcrypt only reads this many bytes of input and silently drops the rest.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Salted bcrypt digest of a user's password.
///
/// There is no way to get the plaintext back out, and `Debug` never prints
/// the digest, so it cannot leak through logs.
#[derive(Clone, PartialEq, Eq, sqlx::Type)]
#[sqlx(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn generate(plaintext: &str, cost: u32) -> Result<Self> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::Validation(format!(
                "password: must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let digest = bcrypt::hash(plaintext, cost)?;
        Ok(Self(digest))
    }

    /// Constant-time check of `plaintext` against the stored digest. A
    /// malformed digest or an input bcrypt would truncate never matches.
    pub fn verify(&self, plaintext: &str) -> bool {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return false;
        }
        bcrypt::verify(plaintext, &self.0).unwrap_or(false)
    }

    /// Same bcrypt work as `verify` for an account that does not exist, so
    /// response time does not reveal which usernames are registered.
    /// Always false.
    pub fn verify_missing(plaintext: &str, cost: u32) -> bool {
        if plaintext.len() <= MAX_PASSWORD_BYTES {
            let _ = bcrypt::hash(plaintext, cost);
        }
        false
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
