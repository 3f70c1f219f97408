//! Terminal ownership for the TUI session.
//!
//! [`TerminalSession`] puts the terminal into raw mode on the alternate
//! screen with mouse capture, and its guard puts everything back on drop.
//! The panic hook from [`setup_panic_hook`] covers unwinding paths that
//! never reach the drop.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode, restore_terminal};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

use crate::ui::layout::Dimensions;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal once, on drop or on the first explicit call.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { restored: false }
    }

    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

pub struct TerminalSession {
    terminal: Tui,
    guard: TerminalGuard,
}

impl TerminalSession {
    /// Enable raw mode, enter the alternate screen and clear it.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects any of the setup commands.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }

    /// Current window size, used to seed the first layout pass.
    pub fn dimensions(&self) -> Result<Dimensions> {
        let Size { width, height } = self.terminal.size()?;
        Ok(Dimensions::new(width, height))
    }

    /// Leave TUI mode before the session is dropped, e.g. to print to stdout.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.restore();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
