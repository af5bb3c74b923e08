use std::io::{self, stdout, Write};

use crossterm::cursor::{self, MoveTo};
use crossterm::event::{self, Event};
use crossterm::style::{style, Color, Print, PrintStyledContent, Stylize};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use log::{debug, info};
use step_wizard_core::error::Result;
use step_wizard_core::reducer::reduce;
use step_wizard_core::state::WizardState;

use super::keys::action_for;
use super::render::{render_step, step_header};
use super::types::WizardOutcome;

/// Instruction lines shown above the steps
const BANNER: [(&str, Color); 4] = [
    ("Welcome to the wizard!", Color::Blue),
    ("Use the arrow keys to navigate", Color::Yellow),
    ("Press Ctrl+C to exit", Color::Red),
    ("Press enter to select", Color::Cyan),
];

struct RawModeGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for RawModeGuard<W> {
    fn drop(&mut self) {
        // Leaving modes that were never entered is harmless
        let _ = disable_raw_mode();
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(LeaveAlternateScreen);
    }
}

/// Switches `out` to the alternate screen in raw mode.
///
/// The guard exists before any mode is entered, so a failure part way
/// through still restores the terminal.
fn enter_raw_screen<W, F>(out: W, enable_raw: F) -> Result<RawModeGuard<W>>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let mut guard = RawModeGuard { out };

    guard.out.execute(EnterAlternateScreen)?;
    enable_raw()?;
    guard.out.execute(cursor::Hide)?;

    Ok(guard)
}

/// Draws the banner once and returns the first row below it.
fn print_banner() -> Result<u16> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    for (line, color) in BANNER {
        queue!(
            stdout,
            PrintStyledContent(style(line).with(color)),
            cursor::MoveToNextLine(1)
        )?;
    }

    stdout.flush()?;

    // One blank row between the banner and the step
    Ok(BANNER.len() as u16 + 1)
}

/// Redraws everything below `top_row` for the current state.
fn redraw_step(state: &WizardState, top_row: u16) -> Result<()> {
    let mut stdout = stdout();

    queue!(
        stdout,
        MoveTo(0, top_row),
        Clear(ClearType::FromCursorDown),
        Print(step_header(state)),
        cursor::MoveToNextLine(1)
    )?;

    if let Some(options) = render_step(state) {
        // Raw mode does not translate `\n` into a carriage return
        for line in options.lines() {
            queue!(stdout, Print(line), cursor::MoveToNextLine(1))?;
        }
    }

    stdout.flush()?;
    Ok(())
}

/// Runs the wizard until every step is confirmed or the user exits.
///
/// The terminal is switched to the alternate screen in raw mode for the
/// duration of the call and restored before it returns.
///
/// # Errors
///
/// Returns an error if the terminal cannot be configured, read from or
/// written to.
pub fn run_wizard(initial_state: WizardState, show_banner: bool) -> Result<WizardOutcome> {
    let _raw_mode_guard = enter_raw_screen(stdout(), enable_raw_mode)?; // When this goes out of scope, the terminal is restored
    let mut stdout = stdout();

    let top_row = if show_banner {
        print_banner()?
    } else {
        queue!(stdout, Clear(ClearType::All))?;
        0
    };

    let mut state = initial_state;
    redraw_step(&state, top_row)?;

    loop {
        let key_event = match event::read()? {
            Event::Key(key_event) => key_event,
            Event::Resize(..) => {
                redraw_step(&state, top_row)?;
                continue;
            }
            _ => continue,
        };

        let action = action_for(&key_event);
        debug!("{:?} -> {action:?}", key_event.code);

        let transition = reduce(state, action);
        if transition.is_exit() {
            info!(
                "Wizard exited by the user after {} confirmed step(s)",
                transition.state().selections().len()
            );
            return Ok(WizardOutcome::Exited);
        }
        state = transition.into_state();

        if state.is_complete() {
            info!("All {} step(s) confirmed", state.steps().len());
            return Ok(WizardOutcome::Completed(state.into_selections()));
        }

        redraw_step(&state, top_row)?;
    }
}
