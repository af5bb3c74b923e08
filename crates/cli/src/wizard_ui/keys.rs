//! Adapter from crossterm key events to terminal-independent key names.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use step_wizard_core::action::{Action, KeyInput};

/// Names a key press, or returns `None` for keys the wizard has no name for.
///
/// Release and repeat events are dropped so that one physical press maps to
/// one action on every platform.
pub fn key_input(key_event: &KeyEvent) -> Option<KeyInput> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    let name = match key_event.code {
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Enter => "return".to_string(),
        KeyCode::Esc => "escape".to_string(),
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_lowercase().to_string(),
        _ => return None,
    };

    Some(KeyInput { name, ctrl })
}

/// Classifies a key event, falling back to [`Action::Noop`].
pub fn action_for(key_event: &KeyEvent) -> Action {
    key_input(key_event).map_or(Action::Noop, |input| input.action())
}
