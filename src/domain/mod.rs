//! Domain layer: storefront entities, invariants and repository interfaces.

pub mod order;
pub mod product;
pub mod repositories;
pub mod seed;
pub mod user;

// Re-export commonly used types
pub use order::{NewOrder, Order, OrderRepository, OrderStatus, OrderTransition};
pub use product::{NewProduct, Product, ProductRepository};
pub use repositories::RepositoryProvider;
pub use user::{NewUser, User, UserRepository};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
