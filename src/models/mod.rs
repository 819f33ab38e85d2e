//! Core data models for sales-report
//!
//! Money amounts, the category table, and the positional column roles of
//! the order spreadsheet.

pub mod category;
pub mod columns;
pub mod money;

pub use category::{Category, CategoryOverlap, CategoryTable, CategoryValidationError};
pub use columns::ColumnMapping;
pub use money::{Money, MoneyParseError};
