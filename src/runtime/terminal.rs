//! Terminal setup and teardown for the TUI.

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Runs its restore action exactly once: on `restore()` or on drop, whichever
/// comes first. Held from the moment raw mode is on, so early `?` exits and
/// panics still hand back a usable shell.
pub struct TerminalGuard<F: FnMut() = fn()> {
    restore: Option<F>,
}

impl<F: FnMut()> TerminalGuard<F> {
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    pub fn restore(&mut self) {
        if let Some(mut f) = self.restore.take() {
            f();
        }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Best effort; also fine if setup only got halfway.
fn restore_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
}

/// Enable raw mode, enter the alternate screen and build the ratatui terminal.
pub fn setup() -> anyhow::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let guard = TerminalGuard::new(restore_terminal as fn());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to set up terminal")?;

    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn half_setup(restored: &Cell<u32>) -> Result<(), &'static str> {
        let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        let entered: Result<(), &'static str> = Err("cannot enter alternate screen");
        entered?;
        Ok(())
    }

    #[test]
    fn early_error_still_restores() {
        let restored = Cell::new(0);
        assert!(half_setup(&restored).is_err());
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn explicit_restore_runs_once() {
        let restored = Cell::new(0);
        let mut guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
        guard.restore();
        guard.restore();
        drop(guard);
        assert_eq!(restored.get(), 1);
    }

    #[test]
    fn panic_unwinding_restores() {
        let restored = Cell::new(0);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TerminalGuard::new(|| restored.set(restored.get() + 1));
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(restored.get(), 1);
    }
}
