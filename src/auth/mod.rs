pub mod middleware;
pub mod password;
pub mod token;

use serde::{Deserialize, Serialize};

// Re-export necessary items
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

/// Credentials presented when requesting a token.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response body of a successful token request.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed JWT to present as `Authorization: Bearer <token>`.
    pub access_token: String,
}
