//! Application services

mod accounts;
mod catalog;
mod orders;
mod seed;

pub use accounts::AccountService;
pub use catalog::CatalogService;
pub use orders::OrderService;
pub use seed::{run_seed, SeedReport};
