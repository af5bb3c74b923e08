//! Step Wizard Core Library
//!
//! This crate provides the core functionality for step-wizard, a terminal prompt
//! that walks a user through a sequence of single-choice option lists and
//! collects one selection per step.
//!
//! # Key Features
//!
//! - **Wizard Definitions**: Parse and validate YAML-based step configurations
//! - **Wizard State**: Immutable state value replaced on every transition
//! - **Action Mapping**: Classify key descriptors into wizard actions
//! - **Reducer**: Pure `(state, action) -> transition` function
//! - **Error Handling**: Error types for every failure mode
//!
//! # Examples
//!
//! Driving a wizard without a terminal:
//!
//! ```
//! use step_wizard_core::action::map_key;
//! use step_wizard_core::reducer::reduce;
//! use step_wizard_core::state::WizardState;
//! use step_wizard_core::wizard_definitions::sample_steps;
//!
//! let mut state = WizardState::from_definitions(&sample_steps())?;
//! for key in ["down", "return", "return"] {
//!     state = reduce(state, map_key(key, false)).into_state();
//! }
//!
//! assert!(state.is_complete());
//! assert_eq!(state.selections()[0].value, "LEMON");
//! # Ok::<(), step_wizard_core::error::Error>(())
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod reducer;
pub mod state;
pub mod wizard_definitions;
