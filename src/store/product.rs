use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::Product;

/// Persistence operations for products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn create(&self, product: &Product) -> Result<(), AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError>;
    /// Returns the `page`-th block (1-indexed) of up to `limit` products in
    /// creation order; `"asc"` sorts oldest-first, anything else newest-first.
    /// The offset arithmetic is raw: callers are expected to pass `page >= 1`.
    async fn find_all(&self, page: i64, limit: i64, sort: &str) -> Result<Vec<Product>, AppError>;
    async fn update(&self, product: &Product) -> Result<(), AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn create(&self, product: &Product) -> Result<(), AppError> {
        sqlx::query("INSERT INTO products (id, name, price, created_at) VALUES (?, ?, ?, ?)")
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(
            "SELECT id, name, price, created_at FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("product not found".into()))
    }

    async fn find_all(&self, page: i64, limit: i64, sort: &str) -> Result<Vec<Product>, AppError> {
        // The direction is mapped onto a fixed keyword, never interpolated
        // from user input. Ties on created_at fall back to rowid so the
        // ordering is total and stable.
        let dir = if sort == "asc" { "ASC" } else { "DESC" };
        let sql = format!(
            "SELECT id, name, price, created_at FROM products \
             ORDER BY created_at {dir}, rowid {dir} LIMIT ? OFFSET ?"
        );

        let products = sqlx::query_as::<_, Product>(&sql)
            .bind(limit)
            .bind((page - 1) * limit)
            .fetch_all(&self.pool)
            .await?;
        Ok(products)
    }

    async fn update(&self, product: &Product) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(&product.name)
            .bind(product.price)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        // A vanished row is not distinguished from other storage failures.
        if result.rows_affected() == 0 {
            return Err(AppError::DatabaseError("no rows updated".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("product not found".into()));
        }
        Ok(())
    }
}
