//! Classifies key descriptors into wizard actions.

/// Direction to cycle through the options of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Confirm,
    Exit,
    Noop,
}

/// A terminal-independent description of a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub name: String,
    pub ctrl: bool,
}

impl KeyInput {
    pub fn new(name: &str, ctrl: bool) -> Self {
        Self {
            name: name.to_string(),
            ctrl,
        }
    }

    #[must_use]
    pub fn action(&self) -> Action {
        map_key(&self.name, self.ctrl)
    }
}

/// Maps a key name and control modifier to an action.
///
/// Unrecognised keys map to [`Action::Noop`].
#[must_use]
pub fn map_key(name: &str, ctrl: bool) -> Action {
    match (name, ctrl) {
        ("up", _) => Action::Move(Direction::Up),
        ("down", _) => Action::Move(Direction::Down),
        ("c", true) => Action::Exit,
        ("return" | "space", _) => Action::Confirm,
        _ => Action::Noop,
    }
}
