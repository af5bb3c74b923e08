//! Command-line argument parsing.

use clap::Parser;

/// Command-line arguments for the step-wizard CLI tool.
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the wizard definition YAML.
    ///
    /// If not provided, `~/.step-wizard/wizard.yml` is used when it exists,
    /// otherwise a built-in sample wizard.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Print the selections as a YAML list instead of one value per line.
    #[arg(long, short = 'y', action)]
    pub yaml: bool,

    /// Do not show the instructions banner above the steps.
    #[arg(long, action)]
    pub no_banner: bool,
}
