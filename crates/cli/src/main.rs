use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};
use step_wizard_cli::cli_args::Args;
use step_wizard_cli::wizard_ui::{format_selections, run_wizard, WizardOutcome};
use step_wizard_core::config::{self, WizardSource};
use step_wizard_core::error::Result;
use step_wizard_core::file_handling;
use step_wizard_core::state::WizardState;
use step_wizard_core::wizard_definitions::{sample_steps, StepDefinition};

/// Load the step definitions from the configured file or fall back to the sample
fn load_definitions(args: &Args) -> Result<Vec<StepDefinition>> {
    match config::resolve_wizard_source(&args.config_path) {
        WizardSource::File(path) => {
            debug!("Wizard definition path: `{path}`");
            file_handling::get_step_definitions(&path)
        }
        WizardSource::BuiltIn => {
            info!(
                "No wizard definition at `{}`, using the built-in sample",
                config::DEFAULT_CONFIG_PATH
            );
            Ok(sample_steps())
        }
    }
}

fn execute() -> Result<()> {
    let args = Args::parse();

    let definitions = load_definitions(&args)?;

    // Fail before touching the terminal if the definition is malformed
    let state = WizardState::from_definitions(&definitions)?;

    match run_wizard(state, !args.no_banner)? {
        WizardOutcome::Completed(selections) => {
            println!("{}", format_selections(&selections, args.yaml)?);
        }
        WizardOutcome::Exited => {
            debug!("No selections printed, wizard was not completed");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
