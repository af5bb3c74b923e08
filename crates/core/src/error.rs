use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("No steps were found in the wizard definition YAML. Is `{}` empty?", .path)]
    EmptyWizardDefinition { path: String },

    #[error("The wizard has no steps.")]
    NoSteps,

    #[error("Step {} has no options.", .0)]
    EmptyStep(String),

    #[error("Step {} has no default option; exactly one option must be marked `default: true`.", .0)]
    NoDefaultOption(String),

    #[error("Step {} has {} default options ({}); exactly one is allowed.", .step, .values.len(), .values.join(", "))]
    MultipleDefaultOptions { step: String, values: Vec<String> },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn empty_wizard_definition(path: String) -> Self {
        Self::EmptyWizardDefinition { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
