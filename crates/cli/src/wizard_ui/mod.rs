//! Interactive wizard UI.
//!
//! This module turns crossterm key events into wizard actions, renders the
//! active step, and owns the read-key / reduce / redraw loop.
//!
//! # User Interface
//!
//! - Up/down arrows move the highlight, wrapping at either end
//! - Enter or space confirms the highlighted option and moves to the next step
//! - Ctrl+C leaves the wizard immediately

pub mod keys;
pub mod output;
pub mod render;
pub mod types;
pub mod ui;

pub use keys::{action_for, key_input};
pub use output::format_selections;
pub use render::{render_step, step_header};
pub use types::WizardOutcome;
pub use ui::run_wizard;
