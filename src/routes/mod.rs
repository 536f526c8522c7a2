//! HTTP route handlers.

mod auth;
mod health_check;
mod product;

pub use auth::{login, refresh, register, session};
pub use health_check::health_check;
pub use product::{create_product, delete_product, get_product, get_products, update_product};

use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Success envelope shared by every handler. Errors render the same shape
/// (with `status: false`) through the `ResponseError` impl on `AppError`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: bool,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

pub(crate) fn success<T: Serialize>(
    status: StatusCode,
    message: Option<&str>,
    data: T,
) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        status: true,
        status_code: status.as_u16(),
        message: message.map(str::to_owned),
        data,
    })
}
