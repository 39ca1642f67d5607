use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// Input structure for creating a product.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    /// The product name. Must not be empty.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    /// The product price. Must not be negative.
    #[validate(range(min = 0.0, message = "invalid price"))]
    pub price: f64,
}

/// Represents a product as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique identifier (UUID v4), assigned at creation, immutable.
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    /// Timestamp of when the product was created.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new `Product` from validated input, generating a fresh id.
    ///
    /// Fails with `AppError::ValidationError` if the name is empty or the
    /// price is negative.
    pub fn new(input: ProductInput) -> Result<Self, AppError> {
        input.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            name: input.name,
            price: input.price,
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new(ProductInput {
            name: "Product 1".to_string(),
            price: 10.0,
        })
        .unwrap();

        assert!(!product.id.is_nil());
        assert_eq!(product.name, "Product 1");
        assert_eq!(product.price, 10.0);
    }

    #[test]
    fn test_product_ids_are_unique() {
        let a = Product::new(ProductInput {
            name: "A".to_string(),
            price: 1.0,
        })
        .unwrap();
        let b = Product::new(ProductInput {
            name: "B".to_string(),
            price: 1.0,
        })
        .unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_product_requires_name() {
        let result = Product::new(ProductInput {
            name: "".to_string(),
            price: 10.0,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_product_rejects_negative_price() {
        let result = Product::new(ProductInput {
            name: "Product 1".to_string(),
            price: -1.0,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let product = Product::new(ProductInput {
            name: "Freebie".to_string(),
            price: 0.0,
        });
        assert!(product.is_ok());
    }
}
