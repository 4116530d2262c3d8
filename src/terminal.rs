use std::io::{self, Write};

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    terminal::{Clear, ClearType},
};

/// Output surface that can be wiped between screens.
pub trait Display {
    /// Clear the screen. Failures must not abort the session.
    fn clear(&mut self);
}

/// Clears the real terminal through crossterm.
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl TerminalDisplay {
    pub fn new() -> Self {
        Self
    }
}

impl Display for TerminalDisplay {
    fn clear(&mut self) {
        if let Err(e) = clear_stdout() {
            tracing::debug!("failed to clear terminal: {}", e);
        }
    }
}

fn clear_stdout() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.queue(Clear(ClearType::All))?.queue(MoveTo(0, 0))?;
    stdout.flush()
}

/// Leaves the screen untouched.
#[derive(Debug, Default)]
pub struct NoClear;

impl Display for NoClear {
    fn clear(&mut self) {}
}
