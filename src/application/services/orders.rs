//! Order service: checkout persistence and the admin order lifecycle
//!
//! Status changes are applied as conditional writes (`WHERE status = ...`)
//! so two admins acting on the same order cannot both succeed.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::{
    DomainError, DomainResult, NewOrder, Order, OrderStatus, OrderTransition, RepositoryProvider,
};

pub struct OrderService {
    repos: Arc<dyn RepositoryProvider>,
}

impl OrderService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn list_orders(&self) -> DomainResult<Vec<Order>> {
        self.repos.orders().find_all().await
    }

    /// Persist a checkout. New orders always start as `Pendiente`.
    pub async fn create_order(&self, order: NewOrder) -> DomainResult<i32> {
        order.validate()?;
        let user_id = order.user_id;
        let total = order.total;
        let id = self.repos.orders().create(order).await?;
        metrics::counter!("orders_created_total").increment(1);
        info!(order_id = id, user_id, total = %total, "Order placed");
        Ok(id)
    }

    /// `Pendiente` -> `Entregado`
    pub async fn deliver_order(&self, id: i32) -> DomainResult<()> {
        let updated = self
            .repos
            .orders()
            .update_status_if(id, OrderStatus::Pending, OrderStatus::Delivered)
            .await?;
        if updated == 0 {
            return Err(self.rejected(id, OrderTransition::Deliver).await);
        }
        metrics::counter!("orders_delivered_total").increment(1);
        info!(order_id = id, "Order delivered");
        Ok(())
    }

    /// Cancelling removes a pending order; delivered orders are kept.
    pub async fn cancel_order(&self, id: i32) -> DomainResult<()> {
        let deleted = self
            .repos
            .orders()
            .delete_if_status(id, OrderStatus::Pending)
            .await?;
        if deleted == 0 {
            return Err(self.rejected(id, OrderTransition::Cancel).await);
        }
        metrics::counter!("orders_cancelled_total").increment(1);
        info!(order_id = id, "Order cancelled");
        Ok(())
    }

    /// Explain why a conditional write touched no rows.
    async fn rejected(&self, id: i32, transition: OrderTransition) -> DomainError {
        let order = match self.repos.orders().find_by_id(id).await {
            Ok(order) => order,
            Err(e) => return e,
        };
        let Some(order) = order else {
            return DomainError::NotFound {
                entity: "Order",
                field: "id",
                value: id.to_string(),
            };
        };
        let err = match order.check_transition(transition) {
            Err(e) => e,
            // Status moved back between the write and the read
            Ok(_) => DomainError::Conflict(format!("Order {} changed concurrently", id)),
        };
        warn!(order_id = id, status = %order.status, ?transition, "Order transition rejected");
        err
    }
}
