//! Pure state transitions: (WizardState, Action) -> Transition.
//!
//! Nothing here touches the terminal. Actions that cannot apply, such as
//! navigation after the last step was confirmed, return the state unchanged.

use log::debug;

use crate::action::{Action, Direction};
use crate::state::{SelectionResult, WizardState};

/// The result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Keep running with the new state.
    Continue(WizardState),
    /// Stop the driver loop. Carries the state as it was when exit was requested.
    Exit(WizardState),
}

impl Transition {
    pub fn state(&self) -> &WizardState {
        match self {
            Transition::Continue(state) | Transition::Exit(state) => state,
        }
    }

    pub fn into_state(self) -> WizardState {
        match self {
            Transition::Continue(state) | Transition::Exit(state) => state,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Transition::Exit(_))
    }
}

/// Applies `action` to `state`.
pub fn reduce(state: WizardState, action: Action) -> Transition {
    match action {
        Action::Move(direction) => Transition::Continue(move_selection(state, direction)),
        Action::Confirm => Transition::Continue(confirm(state)),
        Action::Exit => Transition::Exit(state),
        Action::Noop => Transition::Continue(state),
    }
}

/// Non-negative modulo, so `-1` wraps to `length - 1`.
///
/// # Panics
///
/// Panics if `length` is zero. Validated steps always have an option.
pub(crate) fn wrap_in_range(index: isize, length: usize) -> usize {
    debug_assert!(length > 0, "cannot wrap into an empty range");
    let length = length as isize;
    (((index % length) + length) % length) as usize
}

fn move_selection(mut state: WizardState, direction: Direction) -> WizardState {
    let step_index = state.step_index;
    let Some(step) = state.steps.get(step_index) else {
        debug!("Ignoring move {direction:?}: wizard is complete");
        return state;
    };
    let Some(current) = step.selected_index() else {
        return state;
    };

    let offset = match direction {
        Direction::Up => -1,
        Direction::Down => 1,
    };
    let new_index = wrap_in_range(current as isize + offset, step.len());
    debug!("Step {}: selection {current} -> {new_index}", step_index + 1);

    let rebuilt = step.with_selected(new_index);
    state.steps[step_index] = rebuilt;
    state
}

fn confirm(mut state: WizardState) -> WizardState {
    let Some(selected) = state.active_step().and_then(|step| step.selected()) else {
        debug!("Ignoring confirm: wizard is complete");
        return state;
    };

    let value = selected.value.clone();
    debug!("Step {} confirmed with `{value}`", state.step_number());

    state.selections.push(SelectionResult { value });
    state.step_index += 1;
    state
}
