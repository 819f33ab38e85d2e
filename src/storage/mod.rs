//! Storage layer for sales-report
//!
//! Reading and writing delimiter-separated table files.

pub mod table;

pub use table::{delimiter_byte, read_table, split_header, write_table_atomic, Row};
