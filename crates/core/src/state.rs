//! The wizard data model.
//!
//! A [`WizardState`] is built once from validated steps and then only ever
//! replaced by the reducer. Every [`Step`] inside a state has exactly one
//! selected option; construction fails otherwise.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::wizard_definitions::StepDefinition;

/// One selectable item within a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOption {
    pub label: String,
    pub value: String,
    pub selected: bool,
}

impl StepOption {
    pub fn new(label: &str, value: &str, selected: bool) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            selected,
        }
    }
}

/// An ordered, fixed-length list of mutually exclusive options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: Option<String>,
    pub title: Option<String>,
    options: Vec<StepOption>,
}

impl Step {
    pub fn new(options: Vec<StepOption>) -> Self {
        Self {
            id: None,
            title: None,
            options,
        }
    }

    pub fn options(&self) -> &[StepOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the highlighted option.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|option| option.selected)
    }

    pub fn selected(&self) -> Option<&StepOption> {
        self.options.iter().find(|option| option.selected)
    }

    /// Rebuilds the option list with only `index` selected.
    #[must_use]
    pub fn with_selected(&self, index: usize) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            options: self
                .options
                .iter()
                .enumerate()
                .map(|(i, option)| StepOption {
                    selected: i == index,
                    ..option.clone()
                })
                .collect(),
        }
    }

    fn describe(&self, index: usize) -> String {
        match &self.id {
            Some(id) => format!("#{} (`{id}`)", index + 1),
            None => format!("#{}", index + 1),
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::EmptyStep(self.describe(index)));
        }

        let selected: Vec<String> = self
            .options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value.clone())
            .collect();

        match selected.len() {
            0 => Err(Error::NoDefaultOption(self.describe(index))),
            1 => Ok(()),
            _ => Err(Error::MultipleDefaultOptions {
                step: self.describe(index),
                values: selected,
            }),
        }
    }
}

impl From<&StepDefinition> for Step {
    fn from(definition: &StepDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            title: definition.title.clone(),
            options: definition
                .options
                .iter()
                .map(|option| StepOption::new(&option.label, &option.value, option.default))
                .collect(),
        }
    }
}

/// The value recorded when a step is confirmed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub(crate) step_index: usize,
    pub(crate) steps: Vec<Step>,
    pub(crate) selections: Vec<SelectionResult>,
}

impl WizardState {
    /// Builds the initial state, starting at the first step with no selections.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no steps, or if any step is empty or does
    /// not have exactly one selected option.
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::NoSteps);
        }

        for (index, step) in steps.iter().enumerate() {
            step.validate(index)?;
        }

        Ok(Self {
            step_index: 0,
            steps,
            selections: Vec::new(),
        })
    }

    /// Builds the initial state from parsed step definitions.
    ///
    /// # Errors
    ///
    /// See [`WizardState::new`].
    pub fn from_definitions(definitions: &[StepDefinition]) -> Result<Self> {
        Self::new(definitions.iter().map(Step::from).collect())
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    /// The 1-indexed step counter shown to the user.
    pub fn step_number(&self) -> usize {
        self.step_index + 1
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn selections(&self) -> &[SelectionResult] {
        &self.selections
    }

    pub fn into_selections(self) -> Vec<SelectionResult> {
        self.selections
    }

    /// The step at the current index, or `None` once every step is confirmed.
    pub fn active_step(&self) -> Option<&Step> {
        self.steps.get(self.step_index)
    }

    pub fn is_complete(&self) -> bool {
        self.step_index >= self.steps.len()
    }
}
