//! Session configuration

use crate::core::{DEFAULT_LENGTH, Rules, RulesError};
use crate::generator::RandomSecrets;

/// Settings that hold for a whole session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Length used when the player leaves the length prompt blank
    pub default_length: usize,
    /// Secrets and guesses may start with `0`
    pub allow_leading_zero: bool,
    /// Fixed seed for reproducible secrets
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Build a configuration, checking the default length
    ///
    /// # Errors
    /// Returns `RulesError::LengthOutOfRange` if `default_length` is outside `[2, 10]`.
    pub fn new(
        default_length: usize,
        allow_leading_zero: bool,
        seed: Option<u64>,
    ) -> Result<Self, RulesError> {
        Rules::new(default_length)?;
        Ok(Self {
            default_length,
            allow_leading_zero,
            seed,
        })
    }

    /// Secret source for this configuration
    #[must_use]
    pub fn secret_source(&self) -> RandomSecrets {
        self.seed
            .map_or_else(RandomSecrets::from_entropy, RandomSecrets::seeded)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            allow_leading_zero: false,
            seed: None,
        }
    }
}
