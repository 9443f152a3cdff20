//! Terminal driver: pumps `console` key events through the state machine
//! and displays the rendered screens. The only stateful layer around the
//! pure core.

use anyhow::Result;
use console::{Key, Term};

use super::render::render;
use super::{InputEvent, Stage, WizardState};

/// ETX, what `console` reports for Ctrl-C in raw mode.
const CTRL_C: char = '\u{3}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed,
    Cancelled,
}

/// Run the wizard session to completion. `materialize` is handed through to
/// the state machine and fires once per summary confirmation.
pub fn run<F>(term: &Term, mut state: WizardState, mut materialize: F) -> Result<WizardOutcome>
where
    F: FnMut(&str, &str, &str) -> Result<()>,
{
    loop {
        term.clear_screen()?;
        term.write_str(&render(&state))?;
        // The error was just displayed; clear it before the next event.
        state.acknowledge_error();

        let key = term.read_key()?;
        let Some(event) = map_key(state.stage(), key) else {
            continue;
        };
        state = state.advance(event, &mut materialize);

        if state.is_terminated() {
            term.clear_screen()?;
            return Ok(if state.is_complete() {
                WizardOutcome::Completed
            } else {
                WizardOutcome::Cancelled
            });
        }
    }
}

/// Physical key to input event. `q` only cancels outside the name prompt so
/// names may contain the letter.
fn map_key(stage: &Stage, key: Key) -> Option<InputEvent> {
    if matches!(stage, Stage::Success { .. }) {
        return Some(InputEvent::Confirm);
    }
    let editing = matches!(stage, Stage::NameInput { .. });
    match key {
        Key::Enter => Some(InputEvent::Confirm),
        Key::Escape => Some(InputEvent::Cancel),
        Key::Char(CTRL_C) => Some(InputEvent::Cancel),
        Key::Char('q') if !editing => Some(InputEvent::Cancel),
        Key::Char(ch) if editing && !ch.is_control() => Some(InputEvent::Char(ch)),
        Key::Backspace if editing => Some(InputEvent::Backspace),
        Key::ArrowLeft => Some(InputEvent::Left),
        Key::ArrowRight => Some(InputEvent::Right),
        Key::ArrowUp => Some(InputEvent::Up),
        Key::ArrowDown => Some(InputEvent::Down),
        _ => None,
    }
}
