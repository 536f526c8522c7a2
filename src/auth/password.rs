//! Password hashing and verification.
//!
//! Bcrypt with a fixed cost of 10: each hash embeds a fresh salt, so two
//! hashes of the same input differ yet both verify. Verification compares
//! in constant time and reports a mismatch as `Ok(false)`, never as an
//! error.

use bcrypt::{hash, verify};

use crate::error::AppError;

const HASH_COST: u32 = 10;

/// Hash a plaintext password.
///
/// # Errors
/// Returns an error only if bcrypt itself fails; there is no strength
/// policy here.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, AppError> {
    verify(password, digest)
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))
}
