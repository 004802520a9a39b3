//! Async catalog provider seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::Product;
use crate::ids::ProductId;

/// Errors from a catalog provider.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog source could not be reached.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// The catalog response could not be decoded.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),
}

/// Source of product records, fetched once at startup.
///
/// The cart core never calls this directly; it only consumes whatever
/// products the caller forwards in add commands. Latency and failure
/// handling belong to the caller.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch all products from the catalog.
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// In-memory catalog with a fixed product list.
///
/// Used by tests and demos in place of a remote catalog service.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Create a catalog over a fixed product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Sample catalog with a few placeholder products.
    pub fn sample() -> Self {
        Self::new(vec![
            Product::new(ProductId::new(1), "Product 1", 10.0),
            Product::new(ProductId::new(2), "Product 2", 20.0),
            Product::new(ProductId::new(3), "Product 3", 30.0),
        ])
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_catalog_returns_products() {
        let catalog = StaticCatalog::sample();
        let products = catalog.fetch_products().await.unwrap();

        assert_eq!(products.len(), 3);
        assert_eq!(products[0].id, ProductId::new(1));
        assert_eq!(products[2].price, 30.0);
    }

    #[tokio::test]
    async fn test_empty_catalog() {
        let catalog = StaticCatalog::default();
        assert!(catalog.fetch_products().await.unwrap().is_empty());
    }
}
