//! User persistence operations.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::User;

/// Insert a new user record.
///
/// Email uniqueness is enforced by the database; a duplicate surfaces as a
/// generic persistence error, not a distinct status.
pub async fn create_user(pool: &PgPool, user: &User) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO users (user_id, email, name, password, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(user.user_id)
    .bind(&user.email)
    .bind(&user.name)
    .bind(&user.password)
    .bind(user.role)
    .bind(user.created_at)
    .bind(user.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Look a user up by email. Absence is `Ok(None)`, not an error; callers
/// match exhaustively.
pub async fn find_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT user_id, email, name, password, role, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
