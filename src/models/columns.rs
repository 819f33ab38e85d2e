//! Positional column roles in the order spreadsheet

use serde::{Deserialize, Serialize};

/// Column mapping configuration for the order spreadsheet (0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    /// Index of the item identifier column
    pub identifier: usize,
    /// Index of the price column
    pub price: usize,
    /// Index of the quantity column
    pub quantity: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            identifier: 0,
            price: 10,
            quantity: 11,
        }
    }
}

impl ColumnMapping {
    pub fn new(identifier: usize, price: usize, quantity: usize) -> Self {
        Self {
            identifier,
            price,
            quantity,
        }
    }

    /// Mapping with quantity read from the price column
    pub fn collapsed(self) -> Self {
        Self {
            quantity: self.price,
            ..self
        }
    }

    /// Minimum number of fields a data row must carry
    pub fn required_width(&self) -> usize {
        self.identifier.max(self.price).max(self.quantity) + 1
    }
}
