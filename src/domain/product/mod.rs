//! Product aggregate
//!
//! Catalog entries identified by a human-assigned `code`.

pub mod model;
pub mod repository;

pub use model::{NewProduct, Product, MAX_PRICE};
pub use repository::ProductRepository;
