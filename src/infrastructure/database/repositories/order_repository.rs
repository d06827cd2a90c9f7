//! SeaORM implementation of OrderRepository

use async_trait::async_trait;
use log::info;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};

use super::db_err;
use crate::domain::{DomainResult, NewOrder, Order, OrderRepository, OrderStatus};
use crate::infrastructure::database::entities::order;

// ── Conversion helpers ──────────────────────────────────────────

fn status_to_domain(s: order::OrderStatus) -> OrderStatus {
    match s {
        order::OrderStatus::Pendiente => OrderStatus::Pending,
        order::OrderStatus::Entregado => OrderStatus::Delivered,
    }
}

fn status_to_entity(s: OrderStatus) -> order::OrderStatus {
    match s {
        OrderStatus::Pending => order::OrderStatus::Pendiente,
        OrderStatus::Delivered => order::OrderStatus::Entregado,
    }
}

fn entity_to_domain(o: order::Model) -> Order {
    Order {
        id: o.id,
        user_id: o.user_id,
        items: o.items,
        status: status_to_domain(o.status),
        total: o.total.round_dp(2),
        address: o.address,
        date: o.date,
    }
}

// ── SeaOrmOrderRepository ───────────────────────────────────────

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_all(&self) -> DomainResult<Vec<Order>> {
        let models = order::Entity::find()
            .order_by_asc(order::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Order>> {
        let model = order::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(entity_to_domain))
    }

    async fn create(&self, o: NewOrder) -> DomainResult<i32> {
        let model = order::ActiveModel {
            user_id: Set(o.user_id),
            items: Set(o.items),
            status: Set(order::OrderStatus::Pendiente),
            total: Set(o.total),
            address: Set(o.address),
            date: Set(o.date),
            ..Default::default()
        };
        let saved = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Order {} placed by user {}: total={}",
            saved.id, saved.user_id, saved.total
        );
        Ok(saved.id)
    }

    async fn update_status_if(&self, id: i32, from: OrderStatus, to: OrderStatus) -> DomainResult<u64> {
        let result = order::Entity::update_many()
            .col_expr(order::Column::Status, Expr::value(to.as_str()))
            .filter(order::Column::Id.eq(id))
            .filter(order::Column::Status.eq(status_to_entity(from)))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }

    async fn delete_if_status(&self, id: i32, status: OrderStatus) -> DomainResult<u64> {
        let result = order::Entity::delete_many()
            .filter(order::Column::Id.eq(id))
            .filter(order::Column::Status.eq(status_to_entity(status)))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_database;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn new_order() -> NewOrder {
        NewOrder {
            user_id: 1,
            items: "Mancuernas x 2, Soga x 1".into(),
            total: Decimal::new(6497, 2),
            address: "Calle Falsa 123".into(),
            date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn created_orders_start_pending() {
        let repo = SeaOrmOrderRepository::new(test_database().await);
        let id = repo.create(new_order()).await.unwrap();

        let order = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(6497, 2));
        assert_eq!(order.items, "Mancuernas x 2, Soga x 1");
    }

    #[tokio::test]
    async fn conditional_update_only_matches_current_status() {
        let repo = SeaOrmOrderRepository::new(test_database().await);
        let id = repo.create(new_order()).await.unwrap();

        let first = repo
            .update_status_if(id, OrderStatus::Pending, OrderStatus::Delivered)
            .await
            .unwrap();
        let second = repo
            .update_status_if(id, OrderStatus::Pending, OrderStatus::Delivered)
            .await
            .unwrap();
        assert_eq!((first, second), (1, 0));

        let order = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[tokio::test]
    async fn conditional_delete_keeps_delivered_orders() {
        let repo = SeaOrmOrderRepository::new(test_database().await);
        let pending = repo.create(new_order()).await.unwrap();
        let delivered = repo.create(new_order()).await.unwrap();
        repo.update_status_if(delivered, OrderStatus::Pending, OrderStatus::Delivered)
            .await
            .unwrap();

        assert_eq!(repo.delete_if_status(pending, OrderStatus::Pending).await.unwrap(), 1);
        assert_eq!(repo.delete_if_status(delivered, OrderStatus::Pending).await.unwrap(), 0);

        let remaining: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(remaining, vec![delivered]);
    }
}
