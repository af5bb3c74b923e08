use step_wizard_core::state::SelectionResult;

/// How the driver loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    /// Every step was confirmed; selections are in confirmation order.
    Completed(Vec<SelectionResult>),
    /// The user pressed Ctrl+C.
    Exited,
}
