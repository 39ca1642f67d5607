pub mod health;
pub mod products;
pub mod users;

use actix_web::web;

use crate::auth::AuthMiddleware;

/// Registers every route. Only the product scope sits behind the bearer-token
/// middleware; user registration and token issuance are public.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .wrap(AuthMiddleware)
            .service(products::create_product)
            .service(products::list_products)
            .service(products::get_product)
            .service(products::update_product)
            .service(products::delete_product),
    )
    .service(
        web::scope("/users")
            .service(users::create_user)
            .service(users::generate_token),
    );
}
