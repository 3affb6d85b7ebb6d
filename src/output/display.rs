//! Display functions for game events
//!
//! Each function writes complete lines to `out`; prompts are written without
//! a newline and flushed.

use super::formatters::{attempts_phrase, goal_line, history_line};
use crate::core::{Code, GuessError, LengthInputError, Rules, Score};
use crate::game::{History, SessionOutcome};
use colored::Colorize;
use std::io::{self, Write};

/// Print the banner shown once per session
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Welcome to 1A2B!".bright_cyan().bold())
}

/// Print the banner shown at the start of every round
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_round_banner<W: Write>(out: &mut W, rules: Rules) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "===== 1A2B Number Guessing =====".bright_cyan())?;
    writeln!(out, "{}", goal_line(rules))?;
    writeln!(
        out,
        "Commands: 'quit' to leave, 'ans' to reveal the answer, 'his' for history"
    )?;
    writeln!(out)
}

/// Write a prompt and flush so it shows before input is read
///
/// # Errors
/// Returns an error if writing to or flushing `out` fails.
pub fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_invalid_length<W: Write>(out: &mut W, err: &LengthInputError) -> io::Result<()> {
    writeln!(out, "{}", err.to_string().red())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_invalid_guess<W: Write>(out: &mut W, err: &GuessError) -> io::Result<()> {
    writeln!(out, "{} {err}", "Invalid input:".red())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_score<W: Write>(out: &mut W, score: Score) -> io::Result<()> {
    writeln!(out, "Result: {}", score.to_string().bright_yellow().bold())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_reveal<W: Write>(out: &mut W, secret: &Code) -> io::Result<()> {
    writeln!(out, "{} Answer: {secret}", "[Hint]".bright_black())
}

/// Print the guesses of the current round, oldest first
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_history<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    if history.is_empty() {
        return writeln!(out, "No history yet.");
    }

    writeln!(out, "History:")?;
    for (number, entry) in history.numbered() {
        writeln!(out, "{}", history_line(number, entry))?;
    }
    Ok(())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_win<W: Write>(out: &mut W, attempts: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} You took {}.",
        "Correct!".bright_green().bold(),
        attempts_phrase(attempts).bright_cyan()
    )
}

/// Print the message matching how the session ended
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_farewell<W: Write>(out: &mut W, outcome: SessionOutcome) -> io::Result<()> {
    match outcome {
        SessionOutcome::Finished | SessionOutcome::InputClosed => {
            writeln!(out, "Thanks for playing!")
        }
        SessionOutcome::Quit => writeln!(out, "Game over. Goodbye!"),
        SessionOutcome::Interrupted => {
            writeln!(out)?;
            writeln!(out, "Interrupted. See you next time!")
        }
    }
}
