use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::User;

/// Persistence operations for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persists a new user. A duplicate email violates the UNIQUE column and
    /// surfaces as a storage error.
    async fn create(&self, user: &User) -> Result<(), AppError>;
    async fn find_by_email(&self, email: &str) -> Result<User, AppError>;
}

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn create(&self, user: &User) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO users (id, name, email, password, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, name, email, password, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("user not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserInput;
    use crate::store::test_support::test_pool;

    fn john() -> User {
        User::new(UserInput {
            name: "John Doe".to_string(),
            email: "j@j.com".to_string(),
            password: "123456".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let store = SqliteUserStore::new(test_pool().await);

        let user = john();
        store.create(&user).await.unwrap();

        let found = store.find_by_email("j@j.com").await.unwrap();
        assert_eq!(found.id, user.id);
        assert_eq!(found.name, "John Doe");
        assert_eq!(found.email, "j@j.com");
        // The hash round-trips so credentials can still be verified.
        assert!(found.validate_password("123456"));
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let store = SqliteUserStore::new(test_pool().await);

        let result = store.find_by_email("nobody@nowhere.com").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_storage_error() {
        let store = SqliteUserStore::new(test_pool().await);

        store.create(&john()).await.unwrap();

        // Same email, different id: the UNIQUE column rejects it.
        let result = store.create(&john()).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
