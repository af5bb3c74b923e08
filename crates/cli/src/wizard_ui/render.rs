use crossterm::style::{style, Color, Stylize};
use itertools::Itertools;
use step_wizard_core::state::{StepOption, WizardState};

/// Marker in front of the highlighted option
pub const SELECTED_MARKER: &str = "❯";

/// Colour of the highlighted option's label
pub const SELECTED_COLOR: Color = Color::Cyan;

fn render_option(option: &StepOption) -> String {
    if option.selected {
        format!(
            "{SELECTED_MARKER} {}",
            style(&option.label).with(SELECTED_COLOR)
        )
    } else {
        format!("  {}", option.label)
    }
}

/// Renders the options of the active step, one per line.
///
/// Returns `None` once the wizard is complete.
pub fn render_step(state: &WizardState) -> Option<String> {
    state
        .active_step()
        .map(|step| step.options().iter().map(render_option).join("\n"))
}

/// The 1-indexed step counter, followed by the step title when it has one.
pub fn step_header(state: &WizardState) -> String {
    match state.active_step().and_then(|step| step.title.as_deref()) {
        Some(title) => format!("Step {}: {title}", state.step_number()),
        None => format!("Step {}", state.step_number()),
    }
}
