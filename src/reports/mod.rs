//! Reports module for sales-report
//!
//! Assembles deducted aggregates into the output table.

pub mod sales_summary;

pub use sales_summary::{CategoryReportRow, SalesSummaryReport};
