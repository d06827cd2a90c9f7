//! Product domain entity

use rust_decimal::Decimal;

use crate::shared::{DomainError, DomainResult};

/// Maximum length of a product code
pub const MAX_CODE_LEN: usize = 50;

/// Largest price the `decimal(10, 2)` column holds
pub const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    /// Unique human-assigned identifier (e.g. `PROD001`)
    pub code: String,
    pub description: String,
    /// Unit price, two decimal places
    pub price: Decimal,
}

/// Data for a product that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub code: String,
    pub description: String,
    pub price: Decimal,
}

impl NewProduct {
    pub fn new(code: impl Into<String>, description: impl Into<String>, price: Decimal) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            price,
        }
    }

    /// Trim the code and check the product is storable.
    pub fn normalized(mut self) -> DomainResult<Self> {
        self.code = self.code.trim().to_string();

        if self.code.is_empty() {
            return Err(DomainError::Validation("Product code cannot be empty".into()));
        }
        if self.code.len() > MAX_CODE_LEN {
            return Err(DomainError::Validation(format!(
                "Product code must be at most {} characters",
                MAX_CODE_LEN
            )));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::Validation(
                "Product description cannot be empty".into(),
            ));
        }
        if self.price.is_sign_negative() {
            return Err(DomainError::Validation("Price cannot be negative".into()));
        }

        self.price = self.price.round_dp(2);
        if self.price > MAX_PRICE {
            return Err(DomainError::Validation(format!(
                "Price cannot exceed {}",
                MAX_PRICE
            )));
        }
        Ok(self)
    }
}
