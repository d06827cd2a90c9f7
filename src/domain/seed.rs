//! First-run seed data
//!
//! Inserted when the `productos` / `usuarios` tables are empty.

use rust_decimal::Decimal;

use super::{NewProduct, NewUser};

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// (code, description, price in cents)
const SEED_PRODUCTS: [(&str, &str, i64); 10] = [
    ("PROD001", "Mancuernas", 2999),
    ("PROD002", "Barra", 3999),
    ("PROD003", "Discos", 3999),
    ("PROD004", "Soga", 499),
    ("PROD005", "Colchoneta", 499),
    ("PROD006", "Cama elastica", 5999),
    ("PROD007", "Banda elastica", 299),
    ("PROD008", "Rodilleras", 399),
    ("PROD009", "Straps", 399),
    ("PROD010", "Musculosas", 999),
];

pub fn seed_products() -> Vec<NewProduct> {
    SEED_PRODUCTS
        .iter()
        .map(|(code, description, cents)| NewProduct::new(*code, *description, Decimal::new(*cents, 2)))
        .collect()
}

pub fn default_admin() -> NewUser {
    NewUser::admin(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
}
