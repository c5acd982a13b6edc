//! Product catalog storage operations

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::models::Product;

/// Trait for product catalog operations
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List the full product catalog
    async fn all(&self) -> Result<Vec<Product>>;

    /// Persist an updated product (stock changes)
    async fn update(&self, product: Product) -> Result<Product>;
}

/// In-memory implementation of `ProductService`
#[derive(Default)]
pub struct InMemoryProductService {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductService {
    /// Create a service seeded with the given catalog.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ProductService for InMemoryProductService {
    async fn all(&self) -> Result<Vec<Product>> {
        Ok(self.lock().clone())
    }

    async fn update(&self, product: Product) -> Result<Product> {
        let mut products = self.lock();
        let Some(stored) = products.iter_mut().find(|stored| stored.id == product.id) else {
            return Err(Error::ProductNotFound(product.id.to_string()));
        };
        *stored = product.clone();
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn all_returns_the_seeded_catalog() {
        let catalog = vec![Product::new("Milk", 3), Product::new("Eggs", 0)];
        let service = InMemoryProductService::new(catalog.clone());

        assert_eq!(service.all().await.unwrap(), catalog);
    }

    #[tokio::test]
    async fn update_replaces_the_stored_product() {
        let mut product = Product::new("Milk", 3);
        let service = InMemoryProductService::new(vec![product.clone()]);

        product.take_one();
        service.update(product.clone()).await.unwrap();

        let stored = service.all().await.unwrap();
        assert_eq!(stored[0].stock, 2);
    }

    #[tokio::test]
    async fn update_of_unknown_product_fails() {
        let service = InMemoryProductService::default();

        let error = service.update(Product::new("Milk", 3)).await.unwrap_err();
        assert!(matches!(error, Error::ProductNotFound(_)));
    }
}
