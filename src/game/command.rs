//! Round input classification

/// What a line of input asks the round to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line
    Empty,
    /// `quit` or `exit`
    Quit,
    /// `ans`: reveal the secret
    Answer,
    /// `his`: list previous guesses
    History,
    /// Anything else, trimmed
    Guess(&'a str),
}

impl<'a> Command<'a> {
    /// Classify one line of input; control words are case-insensitive
    #[must_use]
    pub fn parse(input: &'a str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }

        match trimmed.to_lowercase().as_str() {
            "quit" | "exit" => Self::Quit,
            "ans" => Self::Answer,
            "his" => Self::History,
            _ => Self::Guess(trimmed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_empty() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("  \t"), Command::Empty);
    }

    #[test]
    fn control_words_ignore_case() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("EXIT"), Command::Quit);
        assert_eq!(Command::parse(" Ans "), Command::Answer);
        assert_eq!(Command::parse("HIS"), Command::History);
    }

    #[test]
    fn everything_else_is_a_guess() {
        assert_eq!(Command::parse(" 1234 "), Command::Guess("1234"));
        assert_eq!(Command::parse("answer"), Command::Guess("answer"));
        assert_eq!(Command::parse("12a4"), Command::Guess("12a4"));
    }
}
