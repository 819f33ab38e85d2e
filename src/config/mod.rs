//! Configuration module for sales-report
//!
//! This module provides configuration management including:
//! - Settings file resolution
//! - Run settings (files, delimiters, columns, categories, deduction, mode)

pub mod paths;
pub mod settings;

pub use paths::{user_settings_file, SettingsSource};
pub use settings::{AggregationMode, Settings};
