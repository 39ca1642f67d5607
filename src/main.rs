use std::str::FromStr;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use catalog_api::config::Config;
use catalog_api::routes;
use catalog_api::store::{self, ProductStore, SqliteProductStore, SqliteUserStore, UserStore};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .expect("DATABASE_URL is not a valid SQLite URL")
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Failed to connect to database");

    store::migrate(&pool)
        .await
        .expect("Failed to create schema");

    let product_store: Arc<dyn ProductStore> = Arc::new(SqliteProductStore::new(pool.clone()));
    let user_store: Arc<dyn UserStore> = Arc::new(SqliteUserStore::new(pool));

    let address = (config.server_host.clone(), config.server_port);
    log::info!("starting server at {}", config.server_url());

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(product_store.clone()))
            .app_data(web::Data::from(user_store.clone()))
            .app_data(config.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .configure(routes::config)
    })
    .bind(address)?
    .run()
    .await
}
