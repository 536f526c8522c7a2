//! Product catalog handlers.
//!
//! Reads are public; mutations require an admin session token. The admin
//! guard is an extractor parameter, so rejection happens before the handler
//! body runs.

use actix_web::{http::StatusCode, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::middleware::AdminUser;
use crate::models::Product;
use crate::routes::success;
use crate::services::product::{
    add_product, delete_product_by_id, get_product_by_id, get_products as list_products,
    update_product_by_id,
};
use crate::validators::{
    validate_optional, validate_optional_price, validate_price, validate_required,
};

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub size: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub size: Option<String>,
}

/// GET /product
pub async fn get_products(pool: web::Data<PgPool>) -> Result<HttpResponse, AppError> {
    let products = list_products(pool.get_ref()).await?;
    tracing::info!(count = products.len(), "Product list fetched");
    Ok(success(StatusCode::OK, None, products))
}

/// GET /product/{id}
pub async fn get_product(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    match get_product_by_id(pool.get_ref(), *path).await? {
        Some(product) => Ok(success(StatusCode::OK, None, product)),
        None => Err(AppError::NotFound("Data Not Found".to_string())),
    }
}

/// POST /product (admin)
pub async fn create_product(
    _admin: AdminUser,
    form: web::Json<CreateProductRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let name = validate_required(form.name.as_deref(), "name")?;
    let price = validate_price(form.price)?;
    let size = validate_required(form.size.as_deref(), "size")?;

    let product = Product::new(name, price, size);
    add_product(pool.get_ref(), &product).await?;

    tracing::info!(product_id = %product.product_id, "Product added");

    Ok(success(
        StatusCode::CREATED,
        Some("Add product success"),
        product,
    ))
}

/// PUT /product/{id} (admin)
///
/// Partial update: absent fields are left as stored.
pub async fn update_product(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    form: web::Json<UpdateProductRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let name = validate_optional(form.name.as_deref(), "name")?;
    let price = validate_optional_price(form.price)?;
    let size = validate_optional(form.size.as_deref(), "size")?;

    let product_id = path.into_inner();
    let updated = update_product_by_id(pool.get_ref(), product_id, name, price, size).await?;
    if !updated {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(product_id = %product_id, "Product updated");

    Ok(success(
        StatusCode::OK,
        Some("Update product success"),
        serde_json::json!({}),
    ))
}

/// DELETE /product/{id} (admin)
pub async fn delete_product(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, AppError> {
    let product_id = path.into_inner();
    let deleted = delete_product_by_id(pool.get_ref(), product_id).await?;
    if !deleted {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    tracing::info!(product_id = %product_id, "Product deleted");

    Ok(success(
        StatusCode::OK,
        Some("Delete product success"),
        serde_json::json!({}),
    ))
}
