//! # Tienda Online
//!
//! Small online storefront: a REST backend for products, users and orders,
//! and the client that drives catalog browsing, cart, checkout and the
//! admin views against it.
//!
//! ## Architecture
//!
//! - **domain**: entities, invariants, order state machine, repository traits
//! - **application**: catalog, account, order and seeding services
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum HTTP API with Swagger documentation
//! - **client**: HTTP client, persisted session/cart, storefront flows
//! - **server**: process lifecycle (database, seeding, listener, shutdown)

pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::create_api_router;
