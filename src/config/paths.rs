//! Settings file location
//!
//! ## Resolution Order
//!
//! 1. An explicit path (`--config`, or `SALES_REPORT_CONFIG` through clap)
//! 2. The per-user config directory from the `directories` crate, e.g.
//!    `~/.config/sales-report/config.json` on Linux
//! 3. No file: built-in defaults

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use super::settings::Settings;
use crate::error::ReportResult;

const SETTINGS_FILE_NAME: &str = "config.json";

/// Where a run's settings come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// A file named on the command line or in the environment
    Explicit(PathBuf),
    /// The per-user settings file
    User(PathBuf),
    /// Built-in defaults
    Defaults,
}

impl SettingsSource {
    /// Resolve the source from an optional explicit path
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        match user_settings_file() {
            Some(path) if path.exists() => Self::User(path),
            _ => Self::Defaults,
        }
    }

    /// Load the settings this source points at
    ///
    /// An explicit file must exist; the per-user file was checked on resolve.
    pub fn load(&self) -> ReportResult<Settings> {
        match self {
            Self::Explicit(path) => Settings::load(path),
            Self::User(path) => Settings::load_or_default(path),
            Self::Defaults => Ok(Settings::default()),
        }
    }
}

impl std::fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Explicit(path) | Self::User(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Path of the per-user settings file, if a home directory can be found
pub fn user_settings_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sales-report").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let source = SettingsSource::resolve(Some(Path::new("custom.yaml")));
        assert_eq!(source, SettingsSource::Explicit(PathBuf::from("custom.yaml")));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = SettingsSource::Explicit(temp_dir.path().join("nope.json"));
        assert!(source.load().is_err());
    }

    #[test]
    fn test_explicit_file_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"denominator": 4}"#).unwrap();

        let settings = SettingsSource::Explicit(path).load().unwrap();
        assert_eq!(settings.denominator, 4);
    }

    #[test]
    fn test_defaults_source() {
        let settings = SettingsSource::Defaults.load().unwrap();
        assert_eq!(settings.denominator, 6);
        assert_eq!(SettingsSource::Defaults.to_string(), "built-in defaults");
    }
}
