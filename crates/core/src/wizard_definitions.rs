use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub default: bool,
}

impl OptionDefinition {
    pub fn new(label: &str, value: &str, default: bool) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            default,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: Option<String>,
    pub title: Option<String>,
    pub options: Vec<OptionDefinition>,
}

impl Display for StepDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match (&self.id, &self.title) {
            (Some(id), Some(title)) => write!(formatter, "{id} ({title})"),
            (Some(id), None) => formatter.write_str(id),
            (None, Some(title)) => formatter.write_str(title),
            (None, None) => {
                // Fall back to the option labels
                let labels: Vec<&str> = self.options.iter().map(|o| o.label.as_str()).collect();
                write!(formatter, "[{}]", labels.join(", "))
            }
        }
    }
}

/// The wizard used when no definition file is available.
#[must_use]
pub fn sample_steps() -> Vec<StepDefinition> {
    vec![
        StepDefinition {
            id: Some("fruit".to_string()),
            title: Some("Pick a fruit".to_string()),
            options: vec![
                OptionDefinition::new("Orange", "ORANGE", true),
                OptionDefinition::new("Lemon", "LEMON", false),
                OptionDefinition::new("Strawberry", "STRAWBERRY", false),
            ],
        },
        StepDefinition {
            id: Some("label".to_string()),
            title: Some("Pick a label".to_string()),
            options: vec![
                OptionDefinition::new("Test", "TEST", true),
                OptionDefinition::new("Label", "LABEL", false),
                OptionDefinition::new("Software", "SOFTWARE", false),
            ],
        },
    ]
}
