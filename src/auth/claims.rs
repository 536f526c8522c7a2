//! Session token claims.
//!
//! A token embeds a snapshot of the user record as it was at issuance plus
//! the standard `exp`/`iat` timestamps. The snapshot is authoritative for
//! the token's lifetime: a role change after issuance does not propagate
//! until the user authenticates again.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Role, User};

/// Claims carried inside a signed session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    /// Bcrypt digest copied from the stored record. Carrying it inside the
    /// token is a known exposure, kept as-is.
    pub password: String,
    pub role: Role,
    /// Expiration time (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    pub iat: i64,
}

impl Claims {
    /// Snapshot `user` into a claims payload valid for `ttl_seconds` from
    /// now. A zero or negative TTL produces an already-expired token.
    pub fn new(user: &User, ttl_seconds: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            name: user.name.clone(),
            password: user.password.clone(),
            role: user.role,
            exp: now + ttl_seconds,
            iat: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: Role) -> User {
        User::new(
            "test@example.com".into(),
            "tester".into(),
            "$2b$10$somedigest".into(),
            role,
        )
    }

    #[test]
    fn claims_snapshot_user_fields() {
        let user = sample_user(Role::Regular);
        let claims = Claims::new(&user, 3600);

        assert_eq!(claims.user_id, user.user_id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.password, user.password);
        assert_eq!(claims.role, Role::Regular);
        assert!(claims.exp > claims.iat);
        assert!(!claims.is_admin());
    }

    #[test]
    fn admin_claims_report_admin() {
        let user = sample_user(Role::Admin);
        let claims = Claims::new(&user, 3600);
        assert!(claims.is_admin());
    }

    #[test]
    fn negative_ttl_expires_in_the_past() {
        let user = sample_user(Role::Regular);
        let claims = Claims::new(&user, -3600);
        assert!(claims.exp < Utc::now().timestamp());
    }
}
