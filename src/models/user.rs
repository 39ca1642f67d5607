use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;

/// Input structure for registering a user.
///
/// Every field only has to be non-empty. The email is deliberately not
/// checked for format, only for presence; uniqueness is enforced by the
/// storage layer.
#[derive(Debug, Deserialize, Validate)]
pub struct UserInput {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Represents a user account.
///
/// `password` only ever holds the bcrypt hash. The plaintext is consumed by
/// [`User::new`] and is not recoverable afterwards; the field is skipped when
/// serializing so it never appears in a response body.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new `User` from validated input, generating a fresh id and
    /// replacing the plaintext password with its salted hash.
    pub fn new(input: UserInput) -> Result<Self, AppError> {
        input.validate()?;
        let password = hash_password(&input.password)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            email: input.email,
            password,
            created_at: Utc::now(),
        })
    }

    /// Returns true iff `candidate` matches the stored hash. Never errors;
    /// an unreadable hash counts as a mismatch.
    pub fn validate_password(&self, candidate: &str) -> bool {
        verify_password(candidate, &self.password).unwrap_or(false)
    }
}
