//! Order domain entity and status state machine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::product::MAX_PRICE;
use crate::shared::{DomainError, DomainResult};

/// Order lifecycle status.
///
/// Cancellation is not a status: a cancelled order is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Placed at checkout, waiting for delivery (`Pendiente`)
    Pending,
    /// Handed over to the customer (`Entregado`)
    Delivered,
}

/// Admin actions that move an order through its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderTransition {
    Deliver,
    Cancel,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Delivered => "Entregado",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pendiente" => Some(Self::Pending),
            "Entregado" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Status after applying `transition`; `None` means the order is removed.
    pub fn apply(self, id: i32, transition: OrderTransition) -> DomainResult<Option<Self>> {
        match (self, transition) {
            (Self::Pending, OrderTransition::Deliver) => Ok(Some(Self::Delivered)),
            (Self::Pending, OrderTransition::Cancel) => Ok(None),
            (from, transition) => Err(DomainError::InvalidTransition {
                id,
                from: from.as_str(),
                to: transition.target_label(),
            }),
        }
    }
}

impl OrderTransition {
    fn target_label(&self) -> &'static str {
        match self {
            Self::Deliver => OrderStatus::Delivered.as_str(),
            Self::Cancel => "Anulado",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Customer order. `items` is a human-readable summary, not a line-item list.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub items: String,
    pub status: OrderStatus,
    pub total: Decimal,
    pub address: String,
    pub date: DateTime<Utc>,
}

impl Order {
    /// Check that `transition` is allowed from the current status.
    pub fn check_transition(&self, transition: OrderTransition) -> DomainResult<Option<OrderStatus>> {
        self.status.apply(self.id, transition)
    }
}

/// Order placed at checkout
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub user_id: i32,
    pub items: String,
    pub total: Decimal,
    pub address: String,
    pub date: DateTime<Utc>,
}

impl NewOrder {
    pub fn validate(&self) -> DomainResult<()> {
        if self.items.trim().is_empty() {
            return Err(DomainError::Validation("Order must contain items".into()));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::Validation("Delivery address is required".into()));
        }
        if self.total.is_sign_negative() {
            return Err(DomainError::Validation("Order total cannot be negative".into()));
        }
        if self.total > MAX_PRICE {
            return Err(DomainError::Validation(format!(
                "Order total cannot exceed {}",
                MAX_PRICE
            )));
        }
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order(status: OrderStatus) -> Order {
        Order {
            id: 1,
            user_id: 2,
            items: "Mancuernas x 1".into(),
            status,
            total: Decimal::new(2999, 2),
            address: "Av. Siempre Viva 742".into(),
            date: Utc::now(),
        }
    }

    #[test]
    fn pending_order_can_be_delivered() {
        let order = sample_order(OrderStatus::Pending);
        assert_eq!(
            order.check_transition(OrderTransition::Deliver).unwrap(),
            Some(OrderStatus::Delivered)
        );
    }

    #[test]
    fn pending_order_can_be_cancelled() {
        let order = sample_order(OrderStatus::Pending);
        assert_eq!(order.check_transition(OrderTransition::Cancel).unwrap(), None);
    }

    #[test]
    fn delivered_order_rejects_every_transition() {
        let order = sample_order(OrderStatus::Delivered);
        for t in [OrderTransition::Deliver, OrderTransition::Cancel] {
            let err = order.check_transition(t).unwrap_err();
            assert!(matches!(
                err,
                DomainError::InvalidTransition { id: 1, from: "Entregado", .. }
            ));
        }
    }

    #[test]
    fn status_labels_roundtrip() {
        for status in [OrderStatus::Pending, OrderStatus::Delivered] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Anulado"), None);
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn new_order_requires_address_and_items() {
        let mut order = NewOrder {
            user_id: 1,
            items: "Soga x 2".into(),
            total: Decimal::new(998, 2),
            address: "   ".into(),
            date: Utc::now(),
        };
        assert!(order.validate().is_err());

        order.address = "Calle 1".into();
        assert!(order.validate().is_ok());

        order.items.clear();
        assert!(order.validate().is_err());
    }

    #[test]
    fn total_must_fit_the_column() {
        let order = NewOrder {
            user_id: 1,
            items: "Yate x 2".into(),
            total: MAX_PRICE + Decimal::ONE,
            address: "Puerto 1".into(),
            date: Utc::now(),
        };
        assert!(matches!(order.validate(), Err(DomainError::Validation(_))));
    }
}
