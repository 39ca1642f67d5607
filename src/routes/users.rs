use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    auth::{token, LoginRequest, TokenResponse},
    config::Config,
    error::AppError,
    models::{User, UserInput},
    store::UserStore,
};

/// Registers a new user account.
///
/// ## Responses:
/// - `201 Created`: the account was created. The body is empty; the password
///   hash never leaves the server.
/// - `400 Bad Request`: malformed body or an empty name/email/password.
/// - `500 Internal Server Error`: storage failure, including a duplicate
///   email.
#[post("")]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    input: web::Json<UserInput>,
) -> Result<impl Responder, AppError> {
    let user = User::new(input.into_inner())?;
    store.create(&user).await?;
    Ok(HttpResponse::Created().finish())
}

/// Exchanges credentials for a signed access token.
///
/// An unknown email and a wrong password are indistinguishable to the caller.
///
/// ## Responses:
/// - `200 OK`: returns `{"access_token": <jwt>}`.
/// - `401 Unauthorized`: the credentials do not match any account.
#[post("/generate_token")]
pub async fn generate_token(
    store: web::Data<dyn UserStore>,
    config: web::Data<Config>,
    credentials: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    let credentials = credentials.into_inner();

    let user = match store.find_by_email(&credentials.email).await {
        Ok(user) => user,
        Err(AppError::NotFound(_)) => {
            return Err(AppError::Unauthorized("invalid credentials".into()))
        }
        Err(err) => return Err(err),
    };

    if !user.validate_password(&credentials.password) {
        return Err(AppError::Unauthorized("invalid credentials".into()));
    }

    let access_token = token::generate_token(user.id, &config.jwt_secret, config.jwt_expires_in)?;
    Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
}
