//! Bulls and Cows
//!
//! The 1A2B number guessing game: guess a secret of unique digits, and after
//! each guess learn how many digits are in the right place (A) and how many
//! are in the secret but misplaced (B).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_cows::core::{Rules, Score};
//!
//! let rules = Rules::new(4).unwrap();
//! let secret = rules.parse_guess("4271").unwrap();
//! let guess = rules.parse_guess("1234").unwrap();
//!
//! let score = Score::calculate(&guess, &secret);
//! assert_eq!(score.to_string(), "1A2B");
//! ```

// Core domain types
pub mod core;

// Secret generation
pub mod generator;

// Round and session loop
pub mod game;

// Session settings
pub mod config;

// Console input
pub mod terminal;

// Terminal output formatting
pub mod output;

// Diagnostics
pub mod logging;
