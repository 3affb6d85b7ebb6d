//! Session loop
//!
//! Asks for a length, plays a round, offers a replay, and repeats until the
//! player stops. Input comes from a [`Console`] and secrets from a
//! [`SecretSource`], so the whole loop runs unchanged under test.

use super::round::{Round, RoundStep};
use crate::config::GameConfig;
use crate::core::Rules;
use crate::generator::SecretSource;
use crate::output::formatters::{REPLAY_PROMPT, guess_prompt, length_prompt};
use crate::output::{
    print_farewell, print_history, print_invalid_guess, print_invalid_length, print_prompt,
    print_reveal, print_round_banner, print_score, print_welcome, print_win,
};
use crate::terminal::{Console, Input};
use std::io::{self, Write};
use std::ops::ControlFlow;
use tracing::{debug, info, trace};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Player declined another round
    Finished,
    /// Player typed `quit` or `exit` during a round
    Quit,
    /// Ctrl+C at a prompt
    Interrupted,
    /// Input ran out
    InputClosed,
}

/// An interactive session of one or more rounds
pub struct Session<C, S, W> {
    config: GameConfig,
    console: C,
    secrets: S,
    out: W,
    rounds_won: usize,
}

impl<C: Console, S: SecretSource, W: Write> Session<C, S, W> {
    #[must_use]
    pub const fn new(config: GameConfig, console: C, secrets: S, out: W) -> Self {
        Self {
            config,
            console,
            secrets,
            out,
            rounds_won: 0,
        }
    }

    /// Rounds played to a win so far
    #[must_use]
    pub const fn rounds_won(&self) -> usize {
        self.rounds_won
    }

    /// Play until the player stops, then print the farewell
    ///
    /// Every way of stopping is an `Ok` outcome; only I/O failures are errors.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> io::Result<SessionOutcome> {
        info!(config = ?self.config, "session started");
        print_welcome(&mut self.out)?;

        let outcome = loop {
            let rules = match self.ask_rules()? {
                ControlFlow::Continue(rules) => rules,
                ControlFlow::Break(outcome) => break outcome,
            };

            if let ControlFlow::Break(outcome) = self.play_round(rules)? {
                break outcome;
            }

            match self.ask(REPLAY_PROMPT)? {
                ControlFlow::Continue(answer) if wants_replay(&answer) => {}
                ControlFlow::Continue(_) => break SessionOutcome::Finished,
                ControlFlow::Break(outcome) => break outcome,
            }
        };

        info!(?outcome, rounds_won = self.rounds_won, "session ended");
        print_farewell(&mut self.out, outcome)?;
        self.out.flush()?;
        Ok(outcome)
    }

    /// Prompt and read one line, turning interrupt and end of input into a stop
    fn ask(&mut self, prompt: &str) -> io::Result<ControlFlow<SessionOutcome, String>> {
        print_prompt(&mut self.out, prompt)?;
        Ok(match self.console.read_line()? {
            Input::Line(line) => ControlFlow::Continue(line),
            Input::Interrupted => ControlFlow::Break(SessionOutcome::Interrupted),
            Input::Closed => {
                // Leave the prompt line before the farewell
                writeln!(self.out)?;
                ControlFlow::Break(SessionOutcome::InputClosed)
            }
        })
    }

    fn ask_rules(&mut self) -> io::Result<ControlFlow<SessionOutcome, Rules>> {
        let prompt = length_prompt(self.config.default_length);
        loop {
            let line = match self.ask(&prompt)? {
                ControlFlow::Continue(line) => line,
                ControlFlow::Break(outcome) => return Ok(ControlFlow::Break(outcome)),
            };

            match Rules::from_length_input(&line, self.config.default_length) {
                Ok(rules) => {
                    return Ok(ControlFlow::Continue(
                        rules.with_leading_zero(self.config.allow_leading_zero),
                    ));
                }
                Err(err) => {
                    debug!(input = %line, error = %err, "length rejected");
                    print_invalid_length(&mut self.out, &err)?;
                }
            }
        }
    }

    fn play_round(&mut self, rules: Rules) -> io::Result<ControlFlow<SessionOutcome>> {
        let secret = self.secrets.next_secret(rules);
        info!(length = rules.length(), "round started");
        trace!(%secret, "secret drawn");

        let mut round = Round::new(rules, secret);
        print_round_banner(&mut self.out, rules)?;
        let prompt = guess_prompt(rules.length());

        loop {
            let line = match self.ask(&prompt)? {
                ControlFlow::Continue(line) => line,
                ControlFlow::Break(outcome) => return Ok(ControlFlow::Break(outcome)),
            };

            match round.handle(&line) {
                RoundStep::Ignored => {}
                RoundStep::Quit => return Ok(ControlFlow::Break(SessionOutcome::Quit)),
                RoundStep::Revealed(secret) => print_reveal(&mut self.out, &secret)?,
                RoundStep::ShowHistory => print_history(&mut self.out, round.history())?,
                RoundStep::Rejected(err) => print_invalid_guess(&mut self.out, &err)?,
                RoundStep::Scored(score) => print_score(&mut self.out, score)?,
                RoundStep::Won { score, attempts } => {
                    print_score(&mut self.out, score)?;
                    print_win(&mut self.out, attempts)?;
                    self.rounds_won += 1;
                    info!(attempts, "round won");
                    return Ok(ControlFlow::Continue(()));
                }
            }
        }
    }
}

/// Only `y` and `yes` (any case) start another round
fn wants_replay(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
