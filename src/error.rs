//! Application error handling.
//!
//! One central `AppError` type carries every failure a request can hit:
//! validation (422), authentication (401), authorization (403), missing
//! resources (404), and persistence or other internal faults (500). Handlers
//! return `Result<HttpResponse, AppError>` and the `ResponseError` impl
//! renders the wire envelope, so no handler builds error responses by hand.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::error::Error as StdError;
use std::fmt;

/// Validation errors for request payloads.
///
/// Display renders the message surfaced to the client; only the first
/// failing check per request is reported.
#[derive(Debug, Clone)]
pub enum ValidationError {
    MissingField(&'static str),
    EmptyField(&'static str),
    InvalidFormat(&'static str),
    OutOfRange(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "\"{}\" is required", field),
            ValidationError::EmptyField(field) => {
                write!(f, "\"{}\" is not allowed to be empty", field)
            }
            ValidationError::InvalidFormat(field) => {
                write!(f, "\"{}\" has an invalid format", field)
            }
            ValidationError::OutOfRange(field) => {
                write!(f, "\"{}\" is out of range", field)
            }
        }
    }
}

impl StdError for ValidationError {}

/// Database operation errors. All of these render as a generic 500; the
/// detail stays in the server log.
#[derive(Debug)]
pub enum DatabaseError {
    UniqueViolation(String),
    QueryExecution(String),
    ConnectionPool(String),
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseError::UniqueViolation(msg) => write!(f, "Duplicate entry: {}", msg),
            DatabaseError::QueryExecution(msg) => write!(f, "Query error: {}", msg),
            DatabaseError::ConnectionPool(msg) => {
                write!(f, "Database connection error: {}", msg)
            }
        }
    }
}

impl StdError for DatabaseError {}

/// Central error type all request failures map to.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    /// Bad credentials or an untrusted token. The message is deliberately
    /// generic so callers cannot distinguish unknown emails from wrong
    /// passwords.
    Unauthorized(String),
    /// An access guard rejected the request.
    Forbidden,
    NotFound(String),
    Database(DatabaseError),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{}", e),
            AppError::Unauthorized(msg) => write!(f, "{}", msg),
            AppError::Forbidden => write!(f, "Forbidden"),
            AppError::NotFound(msg) => write!(f, "{}", msg),
            AppError::Database(e) => write!(f, "{}", e),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl StdError for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<DatabaseError> for AppError {
    fn from(err: DatabaseError) -> Self {
        AppError::Database(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        let error_msg = err.to_string();

        if error_msg.contains("duplicate key") || error_msg.contains("unique constraint") {
            AppError::Database(DatabaseError::UniqueViolation(error_msg))
        } else if error_msg.contains("pool") || error_msg.contains("connect") {
            AppError::Database(DatabaseError::ConnectionPool(error_msg))
        } else {
            AppError::Database(DatabaseError::QueryExecution(error_msg))
        }
    }
}

impl From<actix_web::error::BlockingError> for AppError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        AppError::Internal(format!("Blocking task failed: {}", err))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();

        let status = self.status_code();
        // Persistence and internal detail never reaches the client.
        let message = match self {
            AppError::Database(_) | AppError::Internal(_) => {
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "status": false,
            "statusCode": status.as_u16(),
            "message": message,
            "data": {}
        }))
    }
}

impl AppError {
    fn log(&self) {
        match self {
            AppError::Validation(e) => {
                tracing::warn!(error = %e, "Validation error");
            }
            AppError::Unauthorized(msg) => {
                tracing::warn!(error = %msg, "Authentication failure");
            }
            AppError::Forbidden => {
                tracing::warn!("Access guard rejected request");
            }
            AppError::NotFound(msg) => {
                tracing::info!(error = %msg, "Resource not found");
            }
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
            }
        }
    }
}
