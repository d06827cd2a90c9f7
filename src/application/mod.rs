pub mod services;

pub use services::{run_seed, AccountService, CatalogService, OrderService, SeedReport};
