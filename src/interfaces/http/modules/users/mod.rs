//! Users module: account listing and signup

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
