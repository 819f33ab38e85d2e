//! Settings CLI commands
//!
//! Shows the effective settings and writes a starter settings file.

use std::path::PathBuf;

use crate::config::{user_settings_file, Settings, SettingsSource};
use crate::error::{ReportError, ReportResult};

/// Handle the config command: print where settings come from and their values
pub fn handle_config_command(source: &SettingsSource, settings: &Settings) -> ReportResult<()> {
    println!("sales-report Configuration");
    println!("==========================");
    println!("Settings source: {}", source);
    if let Some(path) = user_settings_file() {
        println!("User settings:   {}", path.display());
    }
    println!();
    print!("{}", settings.to_yaml()?);
    Ok(())
}

/// Handle the init command: write the default settings to a file
pub fn handle_init_command(path: Option<PathBuf>, force: bool) -> ReportResult<PathBuf> {
    let path = match path.or_else(user_settings_file) {
        Some(path) => path,
        None => {
            return Err(ReportError::Config(
                "Could not determine a settings directory; pass --path".into(),
            ))
        }
    };

    if path.exists() && !force {
        return Err(ReportError::Validation(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    Settings::default().save(&path)?;
    println!("Default settings written to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");

        let written = handle_init_command(Some(path.clone()), false).unwrap();
        assert_eq!(written, path);

        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded.denominator, 6);
        assert_eq!(loaded.categories.len(), 8);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{}").unwrap();

        assert!(matches!(
            handle_init_command(Some(path.clone()), false),
            Err(ReportError::Validation(_))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");

        handle_init_command(Some(path.clone()), true).unwrap();
        assert!(Settings::load(&path).unwrap().categories.len() == 8);
    }
}
