//! Authentication primitives.
//!
//! Password hashing, session token issuance/verification, and the claims
//! payload embedded in tokens.

mod claims;
mod jwt;
mod password;

#[cfg(test)]
pub(crate) use jwt::test_keys;

pub use claims::Claims;
pub use jwt::issue_token;
pub use jwt::verify_token;
pub use jwt::TokenVerification;
pub use password::hash_password;
pub use password::verify_password;
