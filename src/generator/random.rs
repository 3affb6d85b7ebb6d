//! Random secret generation
//!
//! Secrets are drawn without replacement from the ten decimal digits using a
//! partial Fisher-Yates shuffle, so every valid secret is equally likely.

use super::SecretSource;
use crate::core::{Code, Rules, RulesError};
use rand::Rng;
use rand::SeedableRng;
use rand::prelude::{IndexedRandom, SliceRandom};
use rand::rngs::StdRng;

/// Generate a secret of `length` unique digits
///
/// When `allow_leading_zero` is false the first digit is drawn uniformly from
/// `1..=9` and the rest from the nine digits left over.
///
/// # Errors
/// Returns `RulesError::LengthOutOfRange` unless `2 <= length <= 10`.
///
/// # Examples
/// ```
/// use bulls_cows::generator::generate_secret;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let secret = generate_secret(4, false, &mut rng).unwrap();
/// assert_eq!(secret.len(), 4);
/// assert_ne!(secret.digits()[0], 0);
/// ```
pub fn generate_secret<R: Rng + ?Sized>(
    length: usize,
    allow_leading_zero: bool,
    rng: &mut R,
) -> Result<Code, RulesError> {
    let rules = Rules::new(length)?.with_leading_zero(allow_leading_zero);
    Ok(draw(rules, rng))
}

fn draw<R: Rng + ?Sized>(rules: Rules, rng: &mut R) -> Code {
    let mut pool: Vec<u8> = (0..10).collect();
    let mut digits = Vec::with_capacity(rules.length());

    let remaining = if rules.allow_leading_zero() {
        rules.length()
    } else {
        // Pool is never empty here: it holds 1..=9
        let first = pool[1..].choose(rng).copied().unwrap_or(1);
        pool.retain(|&d| d != first);
        digits.push(first);
        rules.length() - 1
    };

    let (chosen, _) = pool.partial_shuffle(rng, remaining);
    digits.extend_from_slice(chosen);

    Code::from_digits(digits)
}

/// Secret source backed by a seedable RNG
pub struct RandomSecrets<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomSecrets<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSecrets<StdRng> {
    /// Reproducible secrets for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Secrets seeded from the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> SecretSource for RandomSecrets<R> {
    fn next_secret(&mut self, rules: Rules) -> Code {
        draw(rules, &mut self.rng)
    }
}
