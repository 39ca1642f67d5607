use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::{Product, ProductInput},
    store::ProductStore,
};

/// Query parameters for listing products. The values arrive as raw strings so
/// an unparsable number falls back to a default instead of failing the
/// request.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// Creates a new product.
///
/// ## Request Body:
/// - `name`: non-empty product name.
/// - `price`: non-negative price.
///
/// ## Responses:
/// - `201 Created`: returns the created product as JSON.
/// - `400 Bad Request`: malformed body or failed validation.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: storage failure.
#[post("")]
pub async fn create_product(
    store: web::Data<dyn ProductStore>,
    input: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    let product = Product::new(input.into_inner())?;
    store.create(&product).await?;
    Ok(HttpResponse::Created().json(product))
}

/// Lists products, paginated.
///
/// ## Query Parameters:
/// - `page` (optional): 1-indexed page number, default 1. Unparsable or
///   non-positive values collapse to the first page.
/// - `limit` (optional): page size, default 10.
/// - `sort` (optional): `"asc"` for oldest-first (the default); anything else
///   sorts newest-first.
///
/// ## Responses:
/// - `200 OK`: returns a JSON array of products.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `500 Internal Server Error`: storage failure.
#[get("")]
pub async fn list_products(
    store: web::Data<dyn ProductStore>,
    query: web::Query<ListQuery>,
) -> Result<impl Responder, AppError> {
    let page = query
        .page
        .as_deref()
        .and_then(|p| p.parse::<i64>().ok())
        .unwrap_or(0)
        .max(1);
    let limit = match query.limit.as_deref().and_then(|l| l.parse::<i64>().ok()) {
        Some(limit) if limit > 0 => limit,
        _ => 10,
    };
    let sort = query.sort.as_deref().unwrap_or("asc");

    let products = store.find_all(page, limit, sort).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// Fetches a single product by id.
///
/// ## Responses:
/// - `200 OK`: returns the product as JSON.
/// - `400 Bad Request`: the path id is not a UUID.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no product with that id.
#[get("/{id}")]
pub async fn get_product(
    store: web::Data<dyn ProductStore>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let product = store.find_by_id(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// Replaces a product's mutable fields.
///
/// The id comes from the path; an id in the body is ignored. The existence
/// check runs before the write, so a miss is a 404 rather than a silent
/// no-op. Field values are not re-validated here.
///
/// ## Responses:
/// - `200 OK`: returns the updated product as JSON.
/// - `400 Bad Request`: malformed body or path id.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no product with that id.
/// - `500 Internal Server Error`: storage failure.
#[put("/{id}")]
pub async fn update_product(
    store: web::Data<dyn ProductStore>,
    id: web::Path<Uuid>,
    input: web::Json<ProductInput>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    let existing = store.find_by_id(id).await?;

    let input = input.into_inner();
    let product = Product {
        id,
        name: input.name,
        price: input.price,
        created_at: existing.created_at,
    };
    store.update(&product).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Deletes a product by id.
///
/// ## Responses:
/// - `200 OK`: the product was removed.
/// - `400 Bad Request`: the path id is not a UUID.
/// - `401 Unauthorized`: missing or invalid bearer token.
/// - `404 Not Found`: no product with that id.
/// - `500 Internal Server Error`: storage failure.
#[delete("/{id}")]
pub async fn delete_product(
    store: web::Data<dyn ProductStore>,
    id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let id = id.into_inner();
    store.find_by_id(id).await?;
    store.delete(id).await?;
    Ok(HttpResponse::Ok().finish())
}
