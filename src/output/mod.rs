//! Terminal output formatting
//!
//! Every line the game shows the player comes from here.

pub mod display;
pub mod formatters;

pub use display::{
    print_farewell, print_history, print_invalid_guess, print_invalid_length, print_prompt,
    print_reveal, print_round_banner, print_score, print_welcome, print_win,
};
