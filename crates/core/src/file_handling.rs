//! Reading wizard definitions from disk.

use std::fs::File;

use log::debug;

use crate::error::{Error, Result};
use crate::wizard_definitions::StepDefinition;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Reads and parses the wizard step definitions.
///
/// Only the file shape is checked here; the one-default-per-step rule is
/// enforced when the definitions are turned into a
/// [`WizardState`](crate::state::WizardState).
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened
/// - The file contains invalid YAML or does not match the expected structure
/// - The file defines no steps
pub fn get_step_definitions(path: &str) -> Result<Vec<StepDefinition>> {
    let reader = get_reader("wizard definition", path)?;

    // Kept explicit: serde_yaml's error needs wrapping with the path
    let parsed: serde_yaml::Result<Option<Vec<StepDefinition>>> = serde_yaml::from_reader(reader);

    let steps = match parsed {
        Ok(steps) => steps.unwrap_or_default(),
        Err(e) => {
            return Err(Error::yaml_error(
                "reading".to_string(),
                "wizard definition".to_string(),
                path.to_string(),
                e,
            ));
        }
    };

    if steps.is_empty() {
        return Err(Error::empty_wizard_definition(path.to_string()));
    }

    debug!("Loaded {} step(s) from `{path}`", steps.len());
    for (index, step) in steps.iter().enumerate() {
        debug!("Step {}: {step}", index + 1);
    }

    Ok(steps)
}
