//! Console input
//!
//! The game reads whole lines through the [`Console`] trait. On a real
//! terminal lines are read in raw mode so Ctrl+C arrives as an event instead
//! of killing the process; piped input is read line by line. Signals that
//! arrive outside raw mode reach the console through an [`Interrupter`].

mod console;
mod signal;

pub use console::{Interrupter, StdinConsole, TerminalConsole};
pub use signal::forward_interrupts;

use std::io;

/// One read from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text without its terminator
    Line(String),
    /// Ctrl+C, Ctrl+\ or SIGINT
    Interrupted,
    /// End of input (Ctrl+D or a closed pipe)
    Closed,
}

/// Line-oriented input source
pub trait Console {
    /// Block until the player finishes a line
    ///
    /// The prompt has already been written by the caller.
    ///
    /// # Errors
    /// Returns an error if the underlying terminal or stream fails.
    fn read_line(&mut self) -> io::Result<Input>;
}
