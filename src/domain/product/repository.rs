//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product};
use crate::shared::DomainResult;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Product>>;
    async fn count(&self) -> DomainResult<u64>;
    /// Atomic insert; `DomainError::Conflict` when the code is taken.
    async fn create(&self, product: NewProduct) -> DomainResult<i32>;
    /// Returns the number of deleted rows (0 or 1).
    async fn delete_by_code(&self, code: &str) -> DomainResult<u64>;
}
