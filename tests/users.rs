use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use catalog_api::auth::{verify_token, TokenResponse};
use catalog_api::config::Config;
use catalog_api::routes;
use catalog_api::routes::health;
use catalog_api::store::{self, ProductStore, SqliteProductStore, SqliteUserStore, UserStore};

const JWT_SECRET: &str = "integration-test-secret";

fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        jwt_secret: JWT_SECRET.to_string(),
        jwt_expires_in: 300,
    }
}

async fn spawn_app() -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
    Error = actix_web::Error,
> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    store::migrate(&pool).await.expect("failed to migrate");

    let product_store: Arc<dyn ProductStore> = Arc::new(SqliteProductStore::new(pool.clone()));
    let user_store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(pool));

    test::init_service(
        App::new()
            .app_data(web::Data::from(product_store))
            .app_data(web::Data::from(user_store))
            .app_data(web::Data::new(test_config()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(health::health)
            .configure(routes::config),
    )
    .await
}

#[actix_rt::test]
async fn test_register_and_generate_token() {
    let app = spawn_app().await;

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "name": "John Doe",
            "email": "a@b.com",
            "password": "pw"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // Correct credentials yield a verifiable token carrying the user id.
    let req = test::TestRequest::post()
        .uri("/users/generate_token")
        .set_json(json!({ "email": "a@b.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let token: TokenResponse = test::read_body_json(resp).await;
    assert!(!token.access_token.is_empty());

    let claims = verify_token(&token.access_token, JWT_SECRET).expect("token should verify");
    assert!(Uuid::parse_str(&claims.sub).is_ok());

    // Wrong password is rejected.
    let req = test::TestRequest::post()
        .uri("/users/generate_token")
        .set_json(json!({ "email": "a@b.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Unknown email is indistinguishable from a wrong password.
    let req = test::TestRequest::post()
        .uri("/users/generate_token")
        .set_json(json!({ "email": "nobody@b.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_register_validation() {
    let app = spawn_app().await;

    let cases = [
        json!({ "name": "", "email": "a@b.com", "password": "pw" }),
        json!({ "name": "John Doe", "email": "", "password": "pw" }),
        json!({ "name": "John Doe", "email": "a@b.com", "password": "" }),
    ];
    for body in cases {
        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body: {}", body);
    }

    // Malformed JSON never reaches the entity layer.
    let req = test::TestRequest::post()
        .uri("/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_duplicate_email_is_storage_failure() {
    let app = spawn_app().await;

    let body = json!({
        "name": "John Doe",
        "email": "dup@b.com",
        "password": "pw"
    });

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
