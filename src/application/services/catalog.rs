//! Catalog service: product listing and admin product management

use std::sync::Arc;

use tracing::info;

use crate::domain::{DomainResult, NewProduct, Product, RepositoryProvider};

pub struct CatalogService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CatalogService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Full catalog, no paging or filtering.
    pub async fn list_products(&self) -> DomainResult<Vec<Product>> {
        self.repos.products().find_all().await
    }

    /// Add a product; fails with `Conflict` if the code is already taken.
    pub async fn create_product(&self, product: NewProduct) -> DomainResult<i32> {
        let product = product.normalized()?;
        let code = product.code.clone();
        let id = self.repos.products().create(product).await?;
        info!(product_id = id, code = %code, "Product created");
        Ok(id)
    }

    /// Remove a product by code. Unknown codes are not an error.
    pub async fn delete_product(&self, code: &str) -> DomainResult<u64> {
        let deleted = self.repos.products().delete_by_code(code).await?;
        info!(code = %code, deleted, "Product delete requested");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::test_database;
    use crate::infrastructure::SeaOrmRepositoryProvider;
    use rust_decimal::Decimal;

    async fn service() -> CatalogService {
        CatalogService::new(Arc::new(SeaOrmRepositoryProvider::new(test_database().await)))
    }

    #[tokio::test]
    async fn created_product_appears_in_listing() {
        let catalog = service().await;
        catalog
            .create_product(NewProduct::new(" PROD011 ", "Guantes", Decimal::new(799, 2)))
            .await
            .unwrap();

        let products = catalog.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].code, "PROD011");
    }

    #[tokio::test]
    async fn duplicate_code_after_trimming_is_rejected() {
        let catalog = service().await;
        catalog
            .create_product(NewProduct::new("PROD011", "Guantes", Decimal::ONE))
            .await
            .unwrap();
        let err = catalog
            .create_product(NewProduct::new("PROD011  ", "Guantes", Decimal::ONE))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn invalid_product_never_reaches_storage() {
        let catalog = service().await;
        let err = catalog
            .create_product(NewProduct::new("", "Sin codigo", Decimal::ONE))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(catalog.list_products().await.unwrap().is_empty());
    }
}
