//! Run settings for sales-report
//!
//! Every knob of a report run lives here: file locations, delimiters, column
//! roles, the ordered category table, the deduction denominator and the
//! aggregation mode. Settings files may be JSON or YAML.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};
use crate::models::{CategoryTable, ColumnMapping};
use crate::storage::delimiter_byte;

/// How rows are turned into amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMode {
    /// Distinct price and quantity columns, row total = price × quantity,
    /// two-digit fractions in the output
    #[default]
    Standard,
    /// Output parity with the original tool: quantity is read from the price
    /// column, row total = price, unpadded fractions
    Literal,
}

impl AggregationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Literal => "literal",
        }
    }
}

/// Settings for a report run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Order spreadsheet
    #[serde(default = "default_orders_file")]
    pub orders_file: PathBuf,

    /// Client spreadsheet (read for validation only)
    #[serde(default = "default_clients_file")]
    pub clients_file: Option<PathBuf>,

    /// Report destination
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Field delimiter of both input spreadsheets
    #[serde(default = "default_input_delimiter")]
    pub input_delimiter: char,

    /// Field delimiter of the report
    #[serde(default = "default_output_delimiter")]
    pub output_delimiter: char,

    #[serde(default)]
    pub columns: ColumnMapping,

    /// Categories in report order; the first match wins
    #[serde(default = "CategoryTable::reference")]
    pub categories: CategoryTable,

    /// Every aggregate is reported as `raw - raw / denominator`
    #[serde(default = "default_denominator")]
    pub denominator: i64,

    #[serde(default)]
    pub mode: AggregationMode,

    /// Label of the grand-total row
    #[serde(default = "default_sum_label")]
    pub sum_label: String,
}

fn default_orders_file() -> PathBuf {
    PathBuf::from("orders.csv")
}

fn default_clients_file() -> Option<PathBuf> {
    Some(PathBuf::from("clients.csv"))
}

fn default_output_file() -> PathBuf {
    PathBuf::from("ordersReport.csv")
}

fn default_input_delimiter() -> char {
    ';'
}

fn default_output_delimiter() -> char {
    ','
}

fn default_denominator() -> i64 {
    6
}

fn default_sum_label() -> String {
    "Sum".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_file: default_orders_file(),
            clients_file: default_clients_file(),
            output_file: default_output_file(),
            input_delimiter: default_input_delimiter(),
            output_delimiter: default_output_delimiter(),
            columns: ColumnMapping::default(),
            categories: CategoryTable::reference(),
            denominator: default_denominator(),
            mode: AggregationMode::default(),
            sum_label: default_sum_label(),
        }
    }
}

/// Settings file encoding, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsFormat {
    Json,
    Yaml,
}

impl SettingsFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

impl Settings {
    /// Load settings from a JSON or YAML file
    pub fn load(path: &Path) -> ReportResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ReportError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&contents, SettingsFormat::for_path(path)).map_err(|e| {
            ReportError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }

    fn parse(contents: &str, format: SettingsFormat) -> Result<Self, String> {
        match format {
            SettingsFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            SettingsFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Load settings from `path` if it exists, otherwise return the defaults
    pub fn load_or_default(path: &Path) -> ReportResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to disk, in the format implied by the extension
    pub fn save(&self, path: &Path) -> ReportResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }

        std::fs::write(path, self.to_string_for(SettingsFormat::for_path(path))?)
            .map_err(|e| ReportError::io(path, e))
    }

    /// Render the settings as YAML
    pub fn to_yaml(&self) -> ReportResult<String> {
        self.to_string_for(SettingsFormat::Yaml)
    }

    fn to_string_for(&self, format: SettingsFormat) -> ReportResult<String> {
        match format {
            SettingsFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e))),
            SettingsFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e))),
        }
    }

    /// Reject settings that cannot produce a meaningful report
    pub fn validate(&self) -> ReportResult<()> {
        if self.denominator <= 0 {
            return Err(ReportError::Validation(format!(
                "denominator must be positive, got {}",
                self.denominator
            )));
        }

        delimiter_byte(self.input_delimiter)?;
        delimiter_byte(self.output_delimiter)?;

        if self.mode == AggregationMode::Standard && self.columns.price == self.columns.quantity {
            return Err(ReportError::Validation(format!(
                "price and quantity share column {}; use distinct columns or literal mode",
                self.columns.price
            )));
        }

        self.categories
            .validate()
            .map_err(|e| ReportError::Validation(e.to_string()))
    }
}
