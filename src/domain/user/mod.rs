//! User aggregate
//!
//! Storefront accounts. Passwords are kept as plain text; the storefront
//! performs login by matching credentials client-side.

pub mod model;
pub mod repository;

pub use model::{NewUser, User};
pub use repository::UserRepository;
