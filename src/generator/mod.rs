//! Secret generation
//!
//! Defines the `SecretSource` trait the game draws secrets from, and the
//! random implementation used in play.

mod random;

pub use random::{RandomSecrets, generate_secret};

use crate::core::{Code, Rules};

/// A source of secrets, one per round
pub trait SecretSource {
    /// Produce the secret for a new round played under `rules`
    fn next_secret(&mut self, rules: Rules) -> Code;
}
