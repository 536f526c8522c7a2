//! Authentication handlers.
//!
//! Registration, login (session creation), session refresh, and session
//! introspection. Orchestrates validation, hashing, persistence, and token
//! issuance; every failure converts to the envelope through `AppError`.

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::auth::{hash_password, issue_token, verify_password, verify_token, TokenVerification};
use crate::configuration::JwtSettings;
use crate::error::AppError;
use crate::middleware::AuthenticatedUser;
use crate::models::User;
use crate::routes::success;
use crate::services::auth::{create_user, find_user_by_email};
use crate::validators::{validate_email, validate_required, validate_role};

/// Registration request. Every field is optional at the wire level so a
/// missing field becomes a 422 validation message, not a 400 parse error.
#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshedSession {
    pub access_token: String,
}

/// POST /auth/register
///
/// Creates a user with a fresh opaque id and the bcrypt digest of the
/// submitted password. Responds 201 with the created record, digest
/// included (a flagged exposure in the wire format).
///
/// # Errors
/// - 422: first validation message (missing/empty field, bad email, bad role)
/// - 500: persistence failure, duplicate email included
pub async fn register(
    form: web::Json<RegisterRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let email = validate_email(form.email.as_deref())?;
    let name = validate_required(form.name.as_deref(), "name")?;
    let password = validate_required(form.password.as_deref(), "password")?;
    let role = validate_role(form.role.as_deref())?;

    // Bcrypt is deliberately slow; keep it off the async workers.
    let digest = web::block(move || hash_password(&password)).await??;

    let user = User::new(email, name, digest, role);
    create_user(pool.get_ref(), &user).await?;

    tracing::info!(user_id = %user.user_id, "User registered");

    Ok(success(
        StatusCode::CREATED,
        Some("Success register user"),
        user,
    ))
}

/// POST /auth/login
///
/// Issues an access token and a refresh token, both embedding the stored
/// identity snapshot. Unknown email and wrong password produce the same
/// 401 so callers cannot enumerate accounts.
pub async fn login(
    form: web::Json<LoginRequest>,
    pool: web::Data<PgPool>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let email = validate_required(form.email.as_deref(), "email")?;
    let password = validate_required(form.password.as_deref(), "password")?;

    let user = find_user_by_email(pool.get_ref(), &email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

    let digest = user.password.clone();
    let password_valid = web::block(move || verify_password(&password, &digest)).await??;
    if !password_valid {
        return Err(AppError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let access_token = issue_token(&user, jwt_config.access_token_expiry, jwt_config.get_ref())?;
    let refresh_token = issue_token(&user, jwt_config.refresh_token_expiry, jwt_config.get_ref())?;

    tracing::info!(user_id = %user.user_id, "Session created");

    Ok(success(
        StatusCode::OK,
        Some("Login success"),
        SessionTokens {
            access_token,
            refresh_token,
        },
    ))
}

/// POST /auth/refresh
///
/// Verifies the presented refresh token, re-resolves the embedded identity,
/// and issues a new access token from the fresh snapshot. An expired or
/// invalid token and an identity that no longer resolves all end in 401.
pub async fn refresh(
    form: web::Json<RefreshRequest>,
    pool: web::Data<PgPool>,
    jwt_config: web::Data<JwtSettings>,
) -> Result<HttpResponse, AppError> {
    let token = validate_required(form.refresh_token.as_deref(), "refreshToken")?;

    let claims = match verify_token(&token, jwt_config.get_ref()) {
        TokenVerification::Valid(claims) => claims,
        TokenVerification::Expired | TokenVerification::Invalid => {
            return Err(AppError::Unauthorized("Invalid refresh token".to_string()));
        }
    };

    let user = find_user_by_email(pool.get_ref(), &claims.email)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".to_string()))?;

    let access_token = issue_token(&user, jwt_config.access_token_expiry, jwt_config.get_ref())?;

    tracing::info!(user_id = %user.user_id, "Session refreshed");

    Ok(success(
        StatusCode::OK,
        Some("Refresh session success"),
        RefreshedSession { access_token },
    ))
}

/// GET /auth/session
///
/// Returns the authorization context of the presented access token; 403
/// without one.
pub async fn session(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(success(StatusCode::OK, None, user.0))
}
