//! Step Wizard CLI Library
//!
//! This crate provides the terminal front end for step-wizard: it loads a
//! wizard definition, walks the user through each step in raw mode, and
//! prints the collected selections once the last step is confirmed.
//!
//! # Key Features
//!
//! - **Interactive Steps**: Arrow keys move the highlight, enter or space confirms
//! - **Scoped Raw Mode**: The terminal is restored on every exit path
//! - **Result Output**: Plain values or a YAML list
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`wizard_ui`]: Key adapter, renderer, and the driver loop
//!
//! # Examples
//!
//! ```bash
//! # Built-in sample wizard (or ~/.step-wizard/wizard.yml if present)
//! sw
//!
//! # Custom wizard, result as YAML
//! sw --config-path ./deploy.yml --yaml
//! ```

pub mod cli_args;
pub mod wizard_ui;
