//! Order DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{DomainError, DomainResult, NewOrder, Order, OrderStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    /// Summary such as `"Mancuernas x 2, Soga x 1"`
    pub items: String,
    #[schema(example = "Pendiente")]
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total: Decimal,
    pub address: String,
    pub date: DateTime<Utc>,
}

impl From<Order> for OrderDto {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            user_id: o.user_id,
            items: o.items,
            status: o.status.as_str().to_string(),
            total: o.total,
            address: o.address,
            date: o.date,
        }
    }
}

/// Checkout submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: i32,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub items: String,
    /// Must be `Pendiente` when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total: Decimal,
    #[validate(length(min = 1, message = "cannot be empty"))]
    pub address: String,
    /// Defaults to the time the request is received
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl CreateOrderRequest {
    pub fn into_new_order(self) -> DomainResult<NewOrder> {
        if let Some(status) = self.status.as_deref() {
            if OrderStatus::parse(status) != Some(OrderStatus::Pending) {
                return Err(DomainError::Validation(format!(
                    "New orders must be {}, got '{}'",
                    OrderStatus::Pending,
                    status
                )));
            }
        }
        Ok(NewOrder {
            user_id: self.user_id,
            items: self.items,
            total: self.total,
            address: self.address,
            date: self.date.unwrap_or_else(Utc::now),
        })
    }
}
