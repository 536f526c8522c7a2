//! Persistent records shared by the services, handlers, and token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User role, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    Admin,
    Regular,
}

/// A registered user.
///
/// `password` holds the bcrypt digest, never the plaintext. The digest is
/// embedded in issued session tokens and echoed back on registration,
/// a known exposure in the wire format, kept deliberately rather than
/// corrected in place.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(email: String, name: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            user_id: Uuid::new_v4(),
            email,
            name,
            password: password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub product_id: Uuid,
    pub name: String,
    pub price: i64,
    pub size: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: String, price: i64, size: String) -> Self {
        let now = Utc::now();
        Self {
            product_id: Uuid::new_v4(),
            name,
            price,
            size,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&Role::Regular).unwrap(), "\"regular\"");
    }

    #[test]
    fn new_user_gets_fresh_id() {
        let a = User::new(
            "a@test.com".into(),
            "a".into(),
            "$2b$10$hash".into(),
            Role::Regular,
        );
        let b = User::new(
            "b@test.com".into(),
            "b".into(),
            "$2b$10$hash".into(),
            Role::Regular,
        );
        assert_ne!(a.user_id, b.user_id);
        assert!(!a.is_admin());
    }
}
