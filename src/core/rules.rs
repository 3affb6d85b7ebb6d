//! Round rules: code length bounds and the leading-zero policy

use super::code::{Code, GuessError};
use std::fmt;
use std::num::IntErrorKind;

/// Shortest playable code
pub const MIN_LENGTH: usize = 2;

/// Longest playable code (every decimal digit used once)
pub const MAX_LENGTH: usize = 10;

/// Length used when the player leaves the length prompt blank
pub const DEFAULT_LENGTH: usize = 4;

/// Invalid rule configuration
///
/// The rejected length is signed so negative answers at the length prompt
/// are reported as they were typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    LengthOutOfRange(i64),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfRange(len) => write!(
                f,
                "Length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {len}"
            ),
        }
    }
}

impl std::error::Error for RulesError {}

/// Error for the player's answer to the length prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthInputError {
    NotANumber(String),
    OutOfRange(RulesError),
}

impl fmt::Display for LengthInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber(_) => write!(f, "Please enter a number"),
            Self::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for LengthInputError {}

impl From<RulesError> for LengthInputError {
    fn from(err: RulesError) -> Self {
        Self::OutOfRange(err)
    }
}

/// Rules for a single round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    length: usize,
    allow_leading_zero: bool,
}

impl Rules {
    /// Create rules for codes of `length` digits with no leading zero
    ///
    /// # Errors
    /// Returns `RulesError::LengthOutOfRange` unless `2 <= length <= 10`.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::Rules;
    ///
    /// assert_eq!(Rules::new(4).unwrap().length(), 4);
    /// assert!(Rules::new(11).is_err());
    /// ```
    pub fn new(length: usize) -> Result<Self, RulesError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(RulesError::LengthOutOfRange(
                i64::try_from(length).unwrap_or(i64::MAX),
            ));
        }
        Ok(Self {
            length,
            allow_leading_zero: false,
        })
    }

    /// Permit (or forbid) codes starting with `0`
    #[must_use]
    pub const fn with_leading_zero(mut self, allow: bool) -> Self {
        self.allow_leading_zero = allow;
        self
    }

    #[inline]
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn allow_leading_zero(self) -> bool {
        self.allow_leading_zero
    }

    /// Validate untrusted input as a guess under these rules
    ///
    /// # Errors
    /// Returns the first failing check, see [`GuessError`].
    pub fn parse_guess(self, raw: &str) -> Result<Code, GuessError> {
        Code::parse(raw, self)
    }

    /// Parse the player's answer to the length prompt
    ///
    /// A blank answer selects `default`. The returned rules forbid a leading
    /// zero; use [`Rules::with_leading_zero`] to relax that.
    ///
    /// # Errors
    /// Returns `NotANumber` for non-integer text and `OutOfRange` for
    /// integers outside `[2, 10]`, including negative and oversized ones.
    pub fn from_length_input(input: &str, default: usize) -> Result<Self, LengthInputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::new(default)?);
        }

        // Integers too large for i64 are still integers; clamp them
        let value: i64 = match trimmed.parse() {
            Ok(value) => value,
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(LengthInputError::NotANumber(trimmed.to_string())),
            },
        };
        let length = usize::try_from(value).map_err(|_| RulesError::LengthOutOfRange(value))?;
        Ok(Self::new(length)?)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            allow_leading_zero: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_accept_bounds() {
        assert_eq!(Rules::new(MIN_LENGTH).unwrap().length(), 2);
        assert_eq!(Rules::new(MAX_LENGTH).unwrap().length(), 10);
    }

    #[test]
    fn rules_reject_out_of_range() {
        assert_eq!(Rules::new(1), Err(RulesError::LengthOutOfRange(1)));
        assert_eq!(Rules::new(11), Err(RulesError::LengthOutOfRange(11)));
        assert_eq!(Rules::new(0), Err(RulesError::LengthOutOfRange(0)));
    }

    #[test]
    fn rules_default_is_four_without_leading_zero() {
        let rules = Rules::default();
        assert_eq!(rules.length(), 4);
        assert!(!rules.allow_leading_zero());
    }

    fn length_of(input: &str, default: usize) -> Result<usize, LengthInputError> {
        Rules::from_length_input(input, default).map(Rules::length)
    }

    #[test]
    fn length_input_blank_uses_default() {
        assert_eq!(length_of("", 4), Ok(4));
        assert_eq!(length_of("   ", 6), Ok(6));
    }

    #[test]
    fn length_input_valid_number() {
        assert_eq!(length_of("7", 4), Ok(7));
        assert_eq!(length_of(" 10 ", 4), Ok(10));
    }

    #[test]
    fn length_input_not_a_number() {
        assert!(matches!(
            length_of("four", 4),
            Err(LengthInputError::NotANumber(_))
        ));
        assert!(matches!(
            length_of("3.5", 4),
            Err(LengthInputError::NotANumber(_))
        ));
        assert_eq!(
            length_of("x", 4).unwrap_err().to_string(),
            "Please enter a number"
        );
    }

    #[test]
    fn length_input_out_of_range() {
        assert_eq!(
            length_of("12", 4),
            Err(LengthInputError::OutOfRange(RulesError::LengthOutOfRange(12)))
        );
        let message = length_of("1", 4).unwrap_err().to_string();
        assert!(message.contains("between 2 and 10"));
    }

    #[test]
    fn length_input_negative_is_out_of_range() {
        assert_eq!(
            length_of("-3", 4),
            Err(LengthInputError::OutOfRange(RulesError::LengthOutOfRange(-3)))
        );
        assert_eq!(
            length_of("-3", 4).unwrap_err().to_string(),
            "Length must be between 2 and 10, got -3"
        );
    }

    #[test]
    fn length_input_huge_integer_is_out_of_range() {
        assert_eq!(
            length_of("99999999999999999999999", 4),
            Err(LengthInputError::OutOfRange(RulesError::LengthOutOfRange(i64::MAX)))
        );
        assert_eq!(
            length_of("-99999999999999999999999", 4),
            Err(LengthInputError::OutOfRange(RulesError::LengthOutOfRange(i64::MIN)))
        );
    }
}
