//! Process interrupt forwarding
//!
//! Raw mode only covers the moments a line is being read. Ctrl+C typed while
//! the game prints, or a SIGINT sent to a piped game, arrives as a signal;
//! this turns it into [`Input::Interrupted`](super::Input::Interrupted) so the
//! session can say goodbye and exit cleanly.

use super::Interrupter;
use std::io;
use std::thread;
use tracing::{debug, warn};

/// Deliver every process interrupt to `interrupter` from a background thread
///
/// After the listener is running, SIGINT no longer terminates the process.
///
/// # Errors
/// Returns an error if the signal runtime or its thread cannot be created.
pub fn forward_interrupts(interrupter: Interrupter) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    thread::Builder::new()
        .name("interrupts".into())
        .spawn(move || {
            runtime.block_on(async {
                loop {
                    if let Err(err) = tokio::signal::ctrl_c().await {
                        warn!(error = %err, "cannot listen for interrupts");
                        return;
                    }
                    debug!("interrupt signal received");
                    interrupter.interrupt();
                }
            });
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{Console, Input, StdinConsole};
    use std::io::Cursor;

    #[test]
    fn listener_starts_without_interrupting() {
        let mut console = StdinConsole::spawn(|| Cursor::new("1234\n")).unwrap();
        forward_interrupts(console.interrupter()).unwrap();
        assert_eq!(console.read_line().unwrap(), Input::Line("1234".into()));
        assert_eq!(console.read_line().unwrap(), Input::Closed);
    }
}
