//! Products module: catalog listing and admin product management

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
