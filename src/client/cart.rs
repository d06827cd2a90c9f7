//! Shopping cart kept on the client
//!
//! Lines snapshot the product's description and price at the time they
//! were first added.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub code: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: u32,
}

impl CartLine {
    /// `None` when price times quantity does not fit a `Decimal`.
    pub fn subtotal(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Accumulates onto an existing line with the same code.
    pub fn add(&mut self, code: &str, description: &str, price: Decimal, quantity: u32) {
        match self.lines.iter_mut().find(|l| l.code == code) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                code: code.to_string(),
                description: description.to_string(),
                price,
                quantity,
            }),
        }
    }

    /// Overwrite a line's quantity; zero or less removes the line.
    /// Returns `false` when no line has that code.
    pub fn set_quantity(&mut self, code: &str, quantity: i64) -> bool {
        let Some(pos) = self.lines.iter().position(|l| l.code == code) else {
            return false;
        };
        if quantity <= 0 {
            self.lines.remove(pos);
        } else {
            self.lines[pos].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        true
    }

    pub fn remove(&mut self, code: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.code != code);
        self.lines.len() != before
    }

    /// Sum of line subtotals, two decimal places. `None` on overflow.
    pub fn total(&self) -> Option<Decimal> {
        self.lines
            .iter()
            .try_fold(Decimal::ZERO, |acc, line| acc.checked_add(line.subtotal()?))
            .map(|total| total.round_dp(2))
    }

    /// `"Mancuernas x 2, Soga x 1"`
    pub fn formatted_items(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{} x {}", l.description, l.quantity))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
