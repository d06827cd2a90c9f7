//! Order repository interface

use async_trait::async_trait;

use super::model::{NewOrder, Order, OrderStatus};
use crate::shared::DomainResult;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Order>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Order>>;
    async fn create(&self, order: NewOrder) -> DomainResult<i32>;

    /// Set `to` only if the order is currently in `from`.
    /// Returns the number of updated rows.
    async fn update_status_if(&self, id: i32, from: OrderStatus, to: OrderStatus) -> DomainResult<u64>;

    /// Delete the order only if it is currently in `status`.
    /// Returns the number of deleted rows.
    async fn delete_if_status(&self, id: i32, status: OrderStatus) -> DomainResult<u64>;
}
