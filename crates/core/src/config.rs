//! Configuration path utilities for step-wizard.
//!
//! This module resolves the wizard definition file path and expands shell
//! variables like `~` in it.

use std::path::Path;

/// Default path for the wizard definition file
pub const DEFAULT_CONFIG_PATH: &str = "~/.step-wizard/wizard.yml";

/// Where the wizard definition comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardSource {
    /// Load the YAML file at this (expanded) path.
    File(String),
    /// No file was requested and none exists at the default path.
    BuiltIn,
}

/// Resolves the wizard definition file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use step_wizard_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/wizard.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/wizard.yml");
/// ```
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Decides which wizard definition to use.
///
/// An explicitly requested path is always used, even if it does not exist, so
/// that a typo surfaces as an IO error. Without one, the default path is used
/// only if it exists.
pub fn resolve_wizard_source(config_path_arg: &Option<String>) -> WizardSource {
    resolve_with_default(config_path_arg, DEFAULT_CONFIG_PATH)
}

fn resolve_with_default(config_path_arg: &Option<String>, default_path: &str) -> WizardSource {
    match config_path_arg {
        Some(config_path) => WizardSource::File(shellexpand::tilde(config_path).to_string()),
        None => {
            let default_path = shellexpand::tilde(default_path).to_string();
            if Path::new(&default_path).exists() {
                WizardSource::File(default_path)
            } else {
                WizardSource::BuiltIn
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path_with_custom_path() {
        let custom_path = Some("/custom/path/wizard.yml".to_string());
        let result = get_config_path(&custom_path);
        assert_eq!(result, "/custom/path/wizard.yml");
    }

    #[test]
    fn test_get_config_path_with_none() {
        let result = get_config_path(&None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("wizard.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_config_path_with_tilde() {
        let result = get_config_path(&Some("~/my-wizard.yml".to_string()));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-wizard.yml"));
    }

    #[test]
    fn test_explicit_missing_path_is_still_a_file_source() {
        let path = Some("/definitely/not/here/wizard.yml".to_string());
        assert_eq!(
            resolve_wizard_source(&path),
            WizardSource::File("/definitely/not/here/wizard.yml".to_string())
        );
    }

    #[test]
    fn test_missing_default_falls_back_to_built_in() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("wizard.yml");

        let result = resolve_with_default(&None, default_path.to_str().unwrap());
        assert_eq!(result, WizardSource::BuiltIn);
    }

    #[test]
    fn test_existing_default_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("wizard.yml");
        std::fs::write(&default_path, "[]\n").unwrap();
        let default_path = default_path.to_str().unwrap();

        let result = resolve_with_default(&None, default_path);
        assert_eq!(result, WizardSource::File(default_path.to_string()));
    }
}
