//! Orders module: checkout submission and the admin order lifecycle

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
