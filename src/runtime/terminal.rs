//! Raw mode and alternate screen handling

use super::events::CrosstermEvents;
use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Owns a full-screen terminal and puts it back the way it was found.
///
/// [`TerminalGuard::restore`] reports teardown errors; dropping the guard
/// without calling it restores on a best-effort basis (panics, early returns).
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalGuard {
    /// Raw mode, alternate screen and bracketed paste, undone again if any
    /// later setup step fails
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let setup = execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
            .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
        match setup {
            Ok(terminal) => Ok(TerminalGuard {
                terminal,
                restored: false,
            }),
            Err(e) => {
                let _ = teardown(&mut stdout, disable_raw_mode());
                Err(e)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn restore(mut self) -> io::Result<()> {
        self.restored = true;
        teardown(self.terminal.backend_mut(), disable_raw_mode())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.restored {
            let _ = teardown(self.terminal.backend_mut(), disable_raw_mode());
        }
    }
}

/// Undo full-screen setup on `out`. Every step runs even when an earlier one
/// failed; each failure is logged and the first one is returned.
fn teardown<W: Write>(out: &mut W, raw_mode: io::Result<()>) -> io::Result<()> {
    let steps = [
        ("disable raw mode", raw_mode),
        ("disable bracketed paste", execute!(out, DisableBracketedPaste)),
        ("leave alternate screen", execute!(out, LeaveAlternateScreen)),
        ("show cursor", execute!(out, Show)),
    ];
    let mut first = None;
    for (step, result) in steps {
        if let Err(e) = result {
            warn!(step, error = %e, "failed to restore terminal");
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

/// Run `f` against the real terminal in full-screen mode.
///
/// The terminal is restored before returning, whatever `f` returned. An
/// error from `f` takes precedence over a teardown error.
pub fn run_fullscreen<T, E, F>(f: F) -> Result<T, E>
where
    E: From<io::Error>,
    F: FnOnce(&mut Terminal<CrosstermBackend<Stdout>>, &mut CrosstermEvents) -> Result<T, E>,
{
    let mut guard = TerminalGuard::enter()?;
    let mut events = CrosstermEvents;
    let result = f(guard.terminal(), &mut events);
    let restored = guard.restore();
    let value = result?;
    restored?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teardown_runs_every_step() {
        let mut out = Vec::new();
        let raw_mode = Err(io::Error::new(io::ErrorKind::Other, "not a tty"));

        let err = teardown(&mut out, raw_mode).expect_err("raw mode failure is reported");
        assert_eq!(err.to_string(), "not a tty");

        let written = String::from_utf8(out).expect("escape codes are utf-8");
        assert!(written.contains("\x1b[?2004l"), "paste left on: {:?}", written);
        assert!(written.contains("\x1b[?1049l"), "alternate screen left on: {:?}", written);
        assert!(written.contains("\x1b[?25h"), "cursor left hidden: {:?}", written);
    }

    #[test]
    fn test_teardown_ok_when_every_step_succeeds() {
        let mut out = Vec::new();
        assert!(teardown(&mut out, Ok(())).is_ok());
    }
}
