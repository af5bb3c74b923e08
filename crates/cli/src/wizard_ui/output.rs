use itertools::Itertools;
use step_wizard_core::error::{Error, Result};
use step_wizard_core::state::SelectionResult;

/// Formats the collected selections for stdout.
///
/// Plain output is one value per line. YAML output is a list of
/// `{value: ...}` mappings.
///
/// # Errors
///
/// Returns an error if YAML serialisation fails.
pub fn format_selections(selections: &[SelectionResult], yaml: bool) -> Result<String> {
    if !yaml {
        return Ok(selections.iter().map(|s| s.value.as_str()).join("\n"));
    }

    serde_yaml::to_string(selections)
        .map(|text| text.trim_end().to_string())
        .map_err(|e| {
            Error::yaml_error(
                "writing".to_string(),
                "selection result".to_string(),
                "<stdout>".to_string(),
                e,
            )
        })
}
