//! Product persistence operations.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Product;

pub async fn add_product(pool: &PgPool, product: &Product) -> Result<(), AppError> {
    sqlx::query(
        r#"
        INSERT INTO products (product_id, name, price, size, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(product.product_id)
    .bind(&product.name)
    .bind(product.price)
    .bind(&product.size)
    .bind(product.created_at)
    .bind(product.updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_products(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    let products = sqlx::query_as::<_, Product>(
        r#"
        SELECT product_id, name, price, size, created_at, updated_at
        FROM products
        ORDER BY created_at
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn get_product_by_id(
    pool: &PgPool,
    product_id: Uuid,
) -> Result<Option<Product>, AppError> {
    let product = sqlx::query_as::<_, Product>(
        r#"
        SELECT product_id, name, price, size, created_at, updated_at
        FROM products
        WHERE product_id = $1
        "#,
    )
    .bind(product_id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Partial update: absent fields keep their stored value. Returns whether a
/// row was actually updated.
pub async fn update_product_by_id(
    pool: &PgPool,
    product_id: Uuid,
    name: Option<String>,
    price: Option<i64>,
    size: Option<String>,
) -> Result<bool, AppError> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET name = COALESCE($2, name),
            price = COALESCE($3, price),
            size = COALESCE($4, size),
            updated_at = $5
        WHERE product_id = $1
        "#,
    )
    .bind(product_id)
    .bind(name)
    .bind(price)
    .bind(size)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns whether a row was actually deleted.
pub async fn delete_product_by_id(pool: &PgPool, product_id: Uuid) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
        .bind(product_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
