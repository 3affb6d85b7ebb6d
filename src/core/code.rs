//! Digit code representation
//!
//! A Code is a sequence of distinct decimal digits. Secrets and validated
//! guesses are both Codes.

use super::rules::{Rules, RulesError};
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated sequence of unique digits
///
/// Digits are stored as values `0..=9`; the input text is kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Code {
    text: String,
    digits: Vec<u8>,
}

/// Reason a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    WrongLength { expected: usize, actual: usize },
    NotDigits,
    LeadingZero,
    RepeatedDigit,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, .. } => write!(f, "Please enter {expected} digits"),
            Self::NotDigits => write!(f, "Only digits are allowed"),
            Self::LeadingZero => write!(f, "The first digit cannot be 0"),
            Self::RepeatedDigit => write!(f, "Digits must not repeat"),
        }
    }
}

impl std::error::Error for GuessError {}

impl Code {
    /// Validate `raw` against `rules`
    ///
    /// Checks run in order and stop at the first failure:
    /// 1. length (in characters) equals `rules.length()`
    /// 2. every character is an ASCII digit
    /// 3. first digit is not `0`, unless the rules allow it
    /// 4. no digit repeats
    ///
    /// # Errors
    /// Returns the `GuessError` of the first failing check.
    ///
    /// # Examples
    /// ```
    /// use bulls_cows::core::{Code, GuessError, Rules};
    ///
    /// let rules = Rules::new(4).unwrap();
    /// assert_eq!(Code::parse("4271", rules).unwrap().text(), "4271");
    /// assert_eq!(Code::parse("1123", rules), Err(GuessError::RepeatedDigit));
    /// ```
    pub fn parse(raw: &str, rules: Rules) -> Result<Self, GuessError> {
        let actual = raw.chars().count();
        if actual != rules.length() {
            return Err(GuessError::WrongLength {
                expected: rules.length(),
                actual,
            });
        }

        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GuessError::NotDigits);
        }

        if !rules.allow_leading_zero() && raw.starts_with('0') {
            return Err(GuessError::LeadingZero);
        }

        let digits: Vec<u8> = raw.bytes().map(|b| b - b'0').collect();
        let mut seen = [false; 10];
        for &d in &digits {
            if seen[usize::from(d)] {
                return Err(GuessError::RepeatedDigit);
            }
            seen[usize::from(d)] = true;
        }

        Ok(Self {
            text: raw.to_string(),
            digits,
        })
    }

    /// Build a code from digit values the caller already knows are unique
    pub(crate) fn from_digits(digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d < 10), "digits must be 0-9");
        let text = digits.iter().map(|&d| char::from(b'0' + d)).collect();
        Self { text, digits }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Digit values, `0..=9`
    #[inline]
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Count of each digit
    ///
    /// Every count is 1 for a validated code; scoring still goes through the
    /// counts so it stays correct for any multiset.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &d in &self.digits {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Failure of [`validate_guess`]
///
/// A bad `length` argument is a caller error and is kept apart from a bad guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Rules(RulesError),
    Guess(GuessError),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(err) => write!(f, "{err}"),
            Self::Guess(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rules(err) => Some(err),
            Self::Guess(err) => Some(err),
        }
    }
}

impl From<RulesError> for ValidationError {
    fn from(err: RulesError) -> Self {
        Self::Rules(err)
    }
}

impl From<GuessError> for ValidationError {
    fn from(err: GuessError) -> Self {
        Self::Guess(err)
    }
}

/// Check a raw guess of `length` digits with the default (no leading zero) rules
///
/// # Errors
/// Returns `ValidationError::Rules` when `length` itself is outside `[2, 10]`
/// and `ValidationError::Guess` for every ordinary validation failure.
pub fn validate_guess(raw: &str, length: usize) -> Result<Code, ValidationError> {
    let rules = Rules::new(length)?;
    Ok(Code::parse(raw, rules)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> Rules {
        Rules::new(4).unwrap()
    }

    #[test]
    fn code_parse_valid() {
        let code = Code::parse("4271", four()).unwrap();
        assert_eq!(code.text(), "4271");
        assert_eq!(code.digits(), &[4, 2, 7, 1]);
        assert_eq!(code.len(), 4);
    }

    #[test]
    fn code_parse_wrong_length() {
        let err = Code::parse("123", four()).unwrap_err();
        assert_eq!(
            err,
            GuessError::WrongLength {
                expected: 4,
                actual: 3
            }
        );
        assert!(err.to_string().contains('4'));

        assert!(matches!(
            Code::parse("12345", four()),
            Err(GuessError::WrongLength { actual: 5, .. })
        ));
    }

    #[test]
    fn code_parse_non_digit() {
        assert_eq!(Code::parse("12a4", four()), Err(GuessError::NotDigits));
        assert_eq!(Code::parse("12 4", four()), Err(GuessError::NotDigits));
        assert_eq!(Code::parse("-123", four()), Err(GuessError::NotDigits));
    }

    #[test]
    fn code_parse_non_ascii_digits_rejected() {
        // Full-width digits are four characters but not ASCII digits
        assert_eq!(Code::parse("１２３４", four()), Err(GuessError::NotDigits));
    }

    #[test]
    fn code_parse_leading_zero() {
        assert_eq!(Code::parse("0123", four()), Err(GuessError::LeadingZero));
    }

    #[test]
    fn code_parse_leading_zero_when_allowed() {
        let rules = four().with_leading_zero(true);
        assert_eq!(Code::parse("0123", rules).unwrap().digits(), &[0, 1, 2, 3]);
    }

    #[test]
    fn code_parse_repeated_digit() {
        assert_eq!(Code::parse("1123", four()), Err(GuessError::RepeatedDigit));
        assert_eq!(Code::parse("1231", four()), Err(GuessError::RepeatedDigit));
    }

    #[test]
    fn checks_short_circuit_in_order() {
        // Wrong length wins over everything else
        assert!(matches!(
            Code::parse("00a", four()),
            Err(GuessError::WrongLength { .. })
        ));
        // Non-digit wins over leading zero
        assert_eq!(Code::parse("0a12", four()), Err(GuessError::NotDigits));
        // Leading zero wins over repeats
        assert_eq!(Code::parse("0012", four()), Err(GuessError::LeadingZero));
    }

    #[test]
    fn validate_guess_uses_length() {
        assert!(validate_guess("1234", 4).is_ok());
        assert!(validate_guess("123", 4).is_err());
        assert!(validate_guess("12a4", 4).is_err());
        assert!(validate_guess("0123", 4).is_err());
        assert_eq!(
            validate_guess("1123", 4),
            Err(ValidationError::Guess(GuessError::RepeatedDigit))
        );
    }

    #[test]
    fn validate_guess_bad_length_is_not_a_guess_error() {
        assert_eq!(
            validate_guess("1", 1),
            Err(ValidationError::Rules(RulesError::LengthOutOfRange(1)))
        );
        assert_eq!(
            validate_guess("12345678901", 11).unwrap_err().to_string(),
            "Length must be between 2 and 10, got 11"
        );
    }

    #[test]
    fn from_digits_builds_text() {
        let code = Code::from_digits(vec![9, 0, 3]);
        assert_eq!(code.text(), "903");
        assert_eq!(format!("{code}"), "903");
    }

    #[test]
    fn digit_counts_all_unique() {
        let code = Code::parse("4271", four()).unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.len(), 4);
        assert!(counts.values().all(|&count| count == 1));
    }
}
