//! Bulls and cows scoring
//!
//! A score is the pair `(A, B)`:
//! - A (bulls): digits matching in value and position
//! - B (cows): digits present in the secret but at another position

use super::Code;
use std::fmt;

/// Feedback for a guess, displayed as `1A2B`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score {
    bulls: usize,
    cows: usize,
}

impl Score {
    #[inline]
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    /// Exact-position matches (A)
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> usize {
        self.bulls
    }

    /// Present-but-misplaced matches (B)
    #[inline]
    #[must_use]
    pub const fn cows(self) -> usize {
        self.cows
    }

    /// True when every one of `length` digits is a bull
    #[inline]
    #[must_use]
    pub const fn is_win(self, length: usize) -> bool {
        self.bulls == length
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. A = positions where the digits agree
    /// 2. Shared = Σ over distinct guess digits of `min(count in guess, count in secret)`
    /// 3. B = Shared − A
    ///
    /// Both codes are expected to have the same length.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, Rules, Score};
    ///
    /// let rules = Rules::new(4).unwrap();
    /// let secret = Code::parse("4271", rules).unwrap();
    /// let guess = Code::parse("1234", rules).unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(1, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, secret: &Code) -> Self {
        debug_assert_eq!(guess.len(), secret.len(), "codes must have equal length");

        let bulls = guess
            .digits()
            .iter()
            .zip(secret.digits())
            .filter(|(g, s)| g == s)
            .count();

        let secret_counts = secret.digit_counts();
        let shared: usize = guess
            .digit_counts()
            .iter()
            .map(|(digit, &count)| {
                let in_secret = secret_counts.get(digit).copied().unwrap_or(0);
                usize::from(count.min(in_secret))
            })
            .sum();

        Self {
            bulls,
            cows: shared - bulls,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.bulls, self.cows)
    }
}

/// Score a guess against a secret, returning `(A, B)`
#[must_use]
pub fn score(guess: &Code, secret: &Code) -> (usize, usize) {
    let result = Score::calculate(guess, secret);
    (result.bulls(), result.cows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use proptest::prelude::*;

    fn code(text: &str) -> Code {
        let rules = Rules::new(text.len()).unwrap().with_leading_zero(true);
        Code::parse(text, rules).unwrap()
    }

    #[test]
    fn score_domain_example() {
        // "2" in place, "1" and "4" misplaced, "3" absent
        assert_eq!(score(&code("1234"), &code("4271")), (1, 2));
    }

    #[test]
    fn score_exact_match() {
        let secret = code("1234");
        let result = Score::calculate(&secret, &secret);
        assert_eq!(result, Score::new(4, 0));
        assert!(result.is_win(4));
    }

    #[test]
    fn score_no_overlap() {
        assert_eq!(score(&code("1234"), &code("5678")), (0, 0));
    }

    #[test]
    fn score_all_misplaced() {
        assert_eq!(score(&code("1234"), &code("4321")), (0, 4));
    }

    #[test]
    fn score_ten_digits() {
        assert_eq!(score(&code("0123456789"), &code("1023456789")), (8, 2));
    }

    #[test]
    fn score_display() {
        assert_eq!(Score::new(1, 2).to_string(), "1A2B");
        assert_eq!(Score::new(4, 0).to_string(), "4A0B");
    }

    #[test]
    fn score_is_win_requires_all_bulls() {
        assert!(!Score::new(3, 1).is_win(4));
        assert!(Score::new(3, 0).is_win(3));
    }

    fn unique_pair() -> impl Strategy<Value = (Code, Code)> {
        (2usize..=10).prop_flat_map(|len| {
            (
                Just((0u8..10).collect::<Vec<_>>()).prop_shuffle(),
                Just((0u8..10).collect::<Vec<_>>()).prop_shuffle(),
            )
                .prop_map(move |(a, b)| {
                    (
                        Code::from_digits(a[..len].to_vec()),
                        Code::from_digits(b[..len].to_vec()),
                    )
                })
        })
    }

    proptest! {
        #[test]
        fn score_stays_within_length((guess, secret) in unique_pair()) {
            let result = Score::calculate(&guess, &secret);
            prop_assert!(result.bulls() <= guess.len());
            prop_assert!(result.bulls() + result.cows() <= guess.len());
        }

        #[test]
        fn score_win_iff_equal((guess, secret) in unique_pair()) {
            let result = Score::calculate(&guess, &secret);
            prop_assert_eq!(result.is_win(guess.len()), guess == secret);
        }

        #[test]
        fn score_against_self_is_perfect((code, _) in unique_pair()) {
            prop_assert_eq!(Score::calculate(&code, &code), Score::new(code.len(), 0));
        }
    }
}
