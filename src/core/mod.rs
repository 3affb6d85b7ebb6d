//! Core domain types for Bulls and Cows
//!
//! This module contains the pure game types: rules, validated digit codes and
//! scoring. Nothing here touches randomness or the terminal.

mod code;
mod rules;
mod score;

pub use code::{Code, GuessError, ValidationError, validate_guess};
pub use rules::{DEFAULT_LENGTH, LengthInputError, MAX_LENGTH, MIN_LENGTH, Rules, RulesError};
pub use score::{Score, score};
