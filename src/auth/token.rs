use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The claims encoded within an access token. The shape is deliberately an
/// explicit struct rather than a free-form map so the wire format is fixed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's id in hyphenated UUID form.
    pub sub: String,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Generates an HS256-signed JWT for the given user, valid for `ttl_seconds`.
///
/// The signing secret comes from the caller (ultimately from `Config`), never
/// from the process environment.
pub fn generate_token(user_id: Uuid, secret: &str, ttl_seconds: u64) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(ttl_seconds as i64))
        .ok_or_else(|| AppError::InternalServerError("token expiry out of range".into()))?
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a JWT and decodes its claims.
///
/// Rejects tokens with a bad signature or a passed expiry with
/// `AppError::Unauthorized`.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}
