//! Single round state machine
//!
//! A round owns the secret, the attempt counter and the history. Each line of
//! input is turned into a [`RoundStep`] that tells the caller what happened;
//! the round itself never prints or exits.

use super::command::Command;
use super::history::History;
use crate::core::{Code, GuessError, Rules, Score};
use tracing::debug;

/// Outcome of feeding one line of input to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundStep {
    /// Blank input, nothing to report
    Ignored,
    /// Player asked to leave the game
    Quit,
    /// Player asked to see the secret
    Revealed(Code),
    /// Player asked to see the history
    ShowHistory,
    /// Guess failed validation; not counted as an attempt
    Rejected(GuessError),
    /// Guess scored, round continues
    Scored(Score),
    /// Guess matched the secret
    Won { score: Score, attempts: usize },
}

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingInput,
    Won,
}

/// One play-through from a fresh secret to a win
#[derive(Debug, Clone)]
pub struct Round {
    rules: Rules,
    secret: Code,
    attempts: usize,
    history: History,
    state: RoundState,
}

impl Round {
    /// Start a round against `secret`
    ///
    /// The secret is expected to satisfy `rules`; it comes from a
    /// [`SecretSource`](crate::generator::SecretSource) in normal play.
    #[must_use]
    pub const fn new(rules: Rules, secret: Code) -> Self {
        Self {
            rules,
            secret,
            attempts: 0,
            history: History::new(),
            state: RoundState::AwaitingInput,
        }
    }

    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Valid guesses submitted so far
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Handle one line of player input
    ///
    /// Input after the round is won is ignored.
    pub fn handle(&mut self, input: &str) -> RoundStep {
        if self.is_won() {
            return RoundStep::Ignored;
        }

        match Command::parse(input) {
            Command::Empty => RoundStep::Ignored,
            Command::Quit => RoundStep::Quit,
            Command::Answer => RoundStep::Revealed(self.secret.clone()),
            Command::History => RoundStep::ShowHistory,
            Command::Guess(raw) => self.guess(raw),
        }
    }

    fn guess(&mut self, raw: &str) -> RoundStep {
        let guess = match self.rules.parse_guess(raw) {
            Ok(guess) => guess,
            Err(err) => {
                debug!(input = raw, error = %err, "guess rejected");
                return RoundStep::Rejected(err);
            }
        };

        self.attempts += 1;
        let score = Score::calculate(&guess, &self.secret);
        debug!(guess = %guess, %score, attempt = self.attempts, "guess scored");
        self.history.record(guess, score);

        if score.is_win(self.rules.length()) {
            self.state = RoundState::Won;
            RoundStep::Won {
                score,
                attempts: self.attempts,
            }
        } else {
            RoundStep::Scored(score)
        }
    }
}
