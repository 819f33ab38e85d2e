//! Business logic layer for sales-report
//!
//! Aggregation of order rows, the proportional deduction, and the run
//! pipeline tying them to the input and output files.

pub mod aggregate;
pub mod deduction;
pub mod pipeline;

pub use aggregate::{Aggregates, Aggregator, CategoryTotals};
pub use deduction::{format_amount, Deduction, FractionStyle};
pub use pipeline::{prepare_report, run_report, PreparedReport, RunSummary};
