//! Formatting utilities for terminal output

use crate::core::Rules;
use crate::game::HistoryEntry;

/// Prompt for the code length
#[must_use]
pub fn length_prompt(default: usize) -> String {
    format!("Enter code length (2-10, Enter for {default}): ")
}

/// Prompt for a guess
#[must_use]
pub fn guess_prompt(length: usize) -> String {
    format!("Enter your guess ({length} digits): ")
}

/// Prompt after a won round
pub const REPLAY_PROMPT: &str = "Play again? (y/n): ";

/// Describe the goal of a round
#[must_use]
pub fn goal_line(rules: Rules) -> String {
    let zero = if rules.allow_leading_zero() {
        "0 may lead"
    } else {
        "first digit is not 0"
    };
    format!("Goal: {} unique digits ({zero})", rules.length())
}

/// One numbered history line, e.g. `  01. 1234 -> 1A2B`
#[must_use]
pub fn history_line(number: usize, entry: &HistoryEntry) -> String {
    format!("  {number:02}. {} -> {}", entry.guess, entry.score)
}

/// "1 attempt" / "3 attempts"
#[must_use]
pub fn attempts_phrase(attempts: usize) -> String {
    if attempts == 1 {
        "1 attempt".to_string()
    } else {
        format!("{attempts} attempts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    #[test]
    fn history_line_pads_number() {
        let rules = Rules::new(4).unwrap();
        let entry = HistoryEntry {
            guess: rules.parse_guess("1234").unwrap(),
            score: Score::new(1, 2),
        };
        assert_eq!(history_line(1, &entry), "  01. 1234 -> 1A2B");
        assert_eq!(history_line(12, &entry), "  12. 1234 -> 1A2B");
    }

    #[test]
    fn prompts_mention_lengths() {
        assert_eq!(guess_prompt(4), "Enter your guess (4 digits): ");
        assert!(length_prompt(6).contains("Enter for 6"));
    }

    #[test]
    fn goal_line_reflects_leading_zero_rule() {
        let rules = Rules::new(5).unwrap();
        assert_eq!(goal_line(rules), "Goal: 5 unique digits (first digit is not 0)");
        assert!(goal_line(rules.with_leading_zero(true)).contains("0 may lead"));
    }

    #[test]
    fn attempts_phrase_pluralizes() {
        assert_eq!(attempts_phrase(1), "1 attempt");
        assert_eq!(attempts_phrase(7), "7 attempts");
    }
}
