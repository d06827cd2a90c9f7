//! Order aggregate
//!
//! Contains the Order entity, its status state machine and repository interface.

pub mod model;
pub mod repository;

pub use model::{NewOrder, Order, OrderStatus, OrderTransition};
pub use repository::OrderRepository;
