//! sales-report - per-category sales summaries from order spreadsheets
//!
//! Reads a delimiter-separated order spreadsheet, sums each row's amount into
//! the category its item identifier belongs to and into a grand total, takes
//! a fixed proportional deduction off every sum and writes the result as a
//! small comma-separated report. Money is kept in integer cents throughout.
//!
//! # Architecture
//!
//! - `config`: Run settings and settings file resolution
//! - `error`: Custom error types
//! - `models`: Money, category table, column roles
//! - `storage`: Delimiter-separated file reading and atomic writing
//! - `services`: Aggregation, deduction and the run pipeline
//! - `reports`: Report assembly and terminal rendering
//! - `cli`: Command handlers for the binary
//!
//! # Example
//!
//! ```rust,ignore
//! use sales_report::config::Settings;
//! use sales_report::services::run_report;
//!
//! let settings = Settings::load(std::path::Path::new("report.yaml"))?;
//! let summary = run_report(&settings)?;
//! println!("{}", summary.prepared.report.format_terminal());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ReportError, ReportResult};
