//! Integration tests for step-wizard-core
//!
//! These tests drive complete wizards through key descriptors and load
//! definitions from YAML files, end to end.

use std::io::Write;

use step_wizard_core::{
    action::{map_key, Action, Direction},
    error::Error,
    file_handling::get_step_definitions,
    reducer::{reduce, Transition},
    state::{SelectionResult, WizardState},
    wizard_definitions::sample_steps,
};
use tempfile::NamedTempFile;

fn run(state: WizardState, actions: &[Action]) -> WizardState {
    actions
        .iter()
        .fold(state, |state, action| reduce(state, *action).into_state())
}

fn values(state: &WizardState) -> Vec<&str> {
    state
        .selections()
        .iter()
        .map(|selection| selection.value.as_str())
        .collect()
}

fn write_yaml(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

#[test]
fn test_navigate_and_confirm_both_steps() {
    let state = WizardState::from_definitions(&sample_steps()).unwrap();
    let down = Action::Move(Direction::Down);

    let state = run(state, &[down, Action::Confirm, down, down, Action::Confirm]);

    assert_eq!(values(&state), vec!["LEMON", "SOFTWARE"]);
    assert_eq!(state.step_index(), 2);
    assert!(state.is_complete());
    assert!(state.active_step().is_none());
}

#[test]
fn test_confirm_defaults_without_moving() {
    let state = WizardState::from_definitions(&sample_steps()).unwrap();

    let state = run(state, &[Action::Confirm, Action::Confirm]);

    assert_eq!(
        state.into_selections(),
        vec![
            SelectionResult {
                value: "ORANGE".to_string()
            },
            SelectionResult {
                value: "TEST".to_string()
            },
        ]
    );
}

#[test]
fn test_key_names_drive_the_wizard() {
    let mut state = WizardState::from_definitions(&sample_steps()).unwrap();

    for (name, ctrl) in [
        ("up", false),
        ("x", false),
        ("space", false),
        ("down", false),
        ("return", false),
    ] {
        match reduce(state, map_key(name, ctrl)) {
            Transition::Continue(next) => state = next,
            Transition::Exit(_) => panic!("`{name}` should not exit"),
        }
    }

    assert_eq!(values(&state), vec!["STRAWBERRY", "LABEL"]);
}

#[test]
fn test_ctrl_c_stops_mid_wizard() {
    let state = WizardState::from_definitions(&sample_steps()).unwrap();
    let state = run(state, &[Action::Confirm]);

    let transition = reduce(state, map_key("c", true));

    assert!(transition.is_exit());
    assert_eq!(values(transition.state()), vec!["ORANGE"]);
    assert_eq!(transition.state().step_index(), 1);
}

#[test]
fn test_keys_after_completion_are_ignored() {
    let state = WizardState::from_definitions(&sample_steps()).unwrap();
    let complete = run(state, &[Action::Confirm, Action::Confirm]);

    let after = run(
        complete.clone(),
        &[
            Action::Move(Direction::Down),
            Action::Confirm,
            Action::Move(Direction::Up),
        ],
    );

    assert_eq!(after, complete);
}

#[test]
fn test_load_wizard_from_yaml() {
    let yaml_content = r#"
- id: "env"
  title: "Target environment"
  options:
    - label: "Staging"
      value: "staging"
      default: true
    - label: "Production"
      value: "prod"

- options:
    - label: "Yes"
      value: "y"
    - label: "No"
      value: "n"
      default: true
"#;
    let temp_file = write_yaml(yaml_content);
    let path = temp_file.path().to_str().unwrap();

    let definitions = get_step_definitions(path).unwrap();
    assert_eq!(definitions.len(), 2);
    assert_eq!(definitions[0].id.as_deref(), Some("env"));
    assert_eq!(definitions[1].title, None);

    let state = WizardState::from_definitions(&definitions).unwrap();
    let state = run(
        state,
        &[Action::Move(Direction::Up), Action::Confirm, Action::Confirm],
    );
    assert_eq!(values(&state), vec!["prod", "n"]);
}

#[test]
fn test_load_missing_file() {
    let result = get_step_definitions("/nonexistent/step-wizard/wizard.yml");
    match result {
        Err(Error::Io {
            file_description,
            path,
            ..
        }) => {
            assert_eq!(file_description, "wizard definition");
            assert_eq!(path, "/nonexistent/step-wizard/wizard.yml");
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_empty_step_list() {
    let temp_file = write_yaml("[]\n");
    let path = temp_file.path().to_str().unwrap();

    let result = get_step_definitions(path);
    assert!(matches!(result, Err(Error::EmptyWizardDefinition { .. })));
}

#[test]
fn test_load_invalid_yaml() {
    let temp_file = write_yaml("- options: \"not a list\"\n");
    let path = temp_file.path().to_str().unwrap();

    let result = get_step_definitions(path);
    assert!(matches!(result, Err(Error::Yaml { .. })));
}

#[test]
fn test_loaded_step_without_options_fails_construction() {
    let yaml_content = r#"
- id: "first"
  options:
    - label: "A"
      value: "a"
      default: true
- id: "second"
  options: []
"#;
    let temp_file = write_yaml(yaml_content);
    let path = temp_file.path().to_str().unwrap();

    let definitions = get_step_definitions(path).unwrap();
    let error = WizardState::from_definitions(&definitions).unwrap_err();
    assert_eq!(error.to_string(), "Step #2 (`second`) has no options.");
}
