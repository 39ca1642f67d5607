//! Persistence layer: one store trait per entity plus the SQLite-backed
//! implementations. Handlers only ever see the traits, so the backend stays
//! swappable and mockable.

pub mod product;
pub mod user;

pub use product::{ProductStore, SqliteProductStore};
pub use user::{SqliteUserStore, UserStore};

use sqlx::SqlitePool;

/// Creates the schema on startup if it does not exist yet.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS products (
            id BLOB PRIMARY KEY,
            name TEXT NOT NULL,
            price REAL NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
