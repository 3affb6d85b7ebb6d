//! Console implementations for terminals and plain streams

use super::{Console, Input};
use crossterm::{
    cursor::MoveLeft,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};
use std::io::{self, BufRead, Write};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
    mpsc,
};
use std::thread;
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// How often a raw-mode read checks for a pending interrupt
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle that makes a console's current or next read return
/// [`Input::Interrupted`]
///
/// Cloneable and `Send`, so it can be handed to a signal listener thread.
#[derive(Debug, Clone)]
pub struct Interrupter {
    flag: Arc<AtomicBool>,
    wake: Option<mpsc::Sender<Feed>>,
}

impl Interrupter {
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::SeqCst);
        if let Some(wake) = &self.wake {
            // The console may already be gone
            let _ = wake.send(Feed::Interrupt);
        }
    }
}

/// Line reader for an interactive terminal
///
/// Raw mode is enabled only while a line is being read, so everything the
/// game prints in between goes through the normal cooked terminal.
///
/// Raw mode also turns off the terminal's job-control keys: Ctrl+Z is ignored
/// while a line is being read, and Ctrl+\ interrupts like Ctrl+C.
pub struct TerminalConsole<W: Write = io::Stdout> {
    echo: W,
    interrupted: Arc<AtomicBool>,
}

impl TerminalConsole<io::Stdout> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            echo: io::stdout(),
            interrupted: Arc::default(),
        }
    }
}

impl Default for TerminalConsole<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalConsole<W> {
    #[must_use]
    pub fn interrupter(&self) -> Interrupter {
        Interrupter {
            flag: Arc::clone(&self.interrupted),
            wake: None,
        }
    }

    fn end_line(&mut self) -> io::Result<()> {
        // Raw mode does not translate \n
        queue!(self.echo, Print("\r\n"))?;
        self.echo.flush()
    }
}

/// Restores cooked mode on every exit path, including `?` returns
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// What a key press does to the line being edited
#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Push(char),
    Backspace,
    Submit,
    Interrupt,
    Close,
    Nothing,
}

fn classify(key: KeyEvent, line_is_empty: bool) -> KeyAction {
    // Windows reports releases as well as presses
    if key.kind != KeyEventKind::Press {
        return KeyAction::Nothing;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Interrupt,
        // Ctrl+\ arrives as Ctrl+4 from legacy terminals
        KeyCode::Char('\\' | '4') if ctrl => KeyAction::Interrupt,
        KeyCode::Char('d') if ctrl && line_is_empty => KeyAction::Close,
        KeyCode::Char(_) if ctrl => KeyAction::Nothing,
        KeyCode::Char(c) => KeyAction::Push(c),
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Enter => KeyAction::Submit,
        _ => KeyAction::Nothing,
    }
}

/// Terminal columns taken by `c` when echoed
fn display_width(c: char) -> u16 {
    c.width().map_or(0, |width| width as u16)
}

impl<W: Write> Console for TerminalConsole<W> {
    fn read_line(&mut self) -> io::Result<Input> {
        let _raw = RawModeGuard::enable()?;
        let mut line = String::new();

        loop {
            if self.interrupted.swap(false, Ordering::SeqCst) {
                self.end_line()?;
                return Ok(Input::Interrupted);
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            let Event::Key(key) = event::read()? else {
                continue;
            };

            match classify(key, line.is_empty()) {
                KeyAction::Push(c) => {
                    line.push(c);
                    queue!(self.echo, Print(c))?;
                    self.echo.flush()?;
                }
                KeyAction::Backspace => {
                    let width = line.pop().map_or(0, display_width);
                    // MoveLeft(0) still moves one column
                    if width > 0 {
                        queue!(self.echo, MoveLeft(width), Clear(ClearType::UntilNewLine))?;
                        self.echo.flush()?;
                    }
                }
                KeyAction::Submit => {
                    self.end_line()?;
                    return Ok(Input::Line(line));
                }
                KeyAction::Interrupt => {
                    self.end_line()?;
                    return Ok(Input::Interrupted);
                }
                KeyAction::Close => {
                    self.end_line()?;
                    return Ok(Input::Closed);
                }
                KeyAction::Nothing => {}
            }
        }
    }
}

/// Message from the reader thread or an [`Interrupter`]
#[derive(Debug)]
enum Feed {
    Read(io::Result<Input>),
    Interrupt,
}

/// Line reader for piped or redirected input
///
/// Lines are read on a background thread so an interrupt can end a read
/// that is still waiting for data.
pub struct StdinConsole {
    feed: mpsc::Receiver<Feed>,
    wake: mpsc::Sender<Feed>,
    interrupted: Arc<AtomicBool>,
    closed: bool,
}

impl StdinConsole {
    /// Read from the process's standard input
    ///
    /// # Errors
    /// Returns an error if the reader thread cannot be spawned.
    pub fn stdin() -> io::Result<Self> {
        Self::spawn(|| io::stdin().lock())
    }

    /// Read lines from the reader `open` builds on the reader thread
    ///
    /// # Errors
    /// Returns an error if the reader thread cannot be spawned.
    pub fn spawn<R, F>(open: F) -> io::Result<Self>
    where
        R: BufRead,
        F: FnOnce() -> R + Send + 'static,
    {
        let (tx, feed) = mpsc::channel();
        let wake = tx.clone();
        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || pump_lines(open(), &tx))?;

        Ok(Self {
            feed,
            wake,
            interrupted: Arc::default(),
            closed: false,
        })
    }

    #[must_use]
    pub fn interrupter(&self) -> Interrupter {
        Interrupter {
            flag: Arc::clone(&self.interrupted),
            wake: Some(self.wake.clone()),
        }
    }
}

/// Forward lines until end of input, a read error, or the console is dropped
fn pump_lines<R: BufRead>(mut reader: R, tx: &mpsc::Sender<Feed>) {
    loop {
        let mut line = String::new();
        let read = match reader.read_line(&mut line) {
            Ok(0) => Ok(Input::Closed),
            Ok(_) => {
                let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed_len);
                Ok(Input::Line(line))
            }
            Err(err) => Err(err),
        };

        let last = !matches!(read, Ok(Input::Line(_)));
        if tx.send(Feed::Read(read)).is_err() || last {
            return;
        }
    }
}

impl Console for StdinConsole {
    fn read_line(&mut self) -> io::Result<Input> {
        if self.closed {
            return Ok(Input::Closed);
        }

        loop {
            // A pending interrupt wins over lines already read ahead
            if self.interrupted.swap(false, Ordering::SeqCst) {
                return Ok(Input::Interrupted);
            }

            match self.feed.recv() {
                Ok(Feed::Interrupt) => {}
                Ok(Feed::Read(Ok(Input::Closed))) | Err(_) => {
                    self.closed = true;
                    return Ok(Input::Closed);
                }
                Ok(Feed::Read(read)) => {
                    // The reader thread stops after an error
                    self.closed = read.is_err();
                    return read;
                }
            }
        }
    }
}
