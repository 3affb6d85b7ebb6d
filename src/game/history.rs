//! Per-round guess history

use crate::core::{Code, Score};

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: Score,
}

/// Append-only list of scored guesses for the active round
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, guess: Code, score: Score) {
        self.entries.push(HistoryEntry { guess, score });
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries paired with their 1-based position
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn history_keeps_submission_order() {
        let rules = Rules::new(4).unwrap();
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(rules.parse_guess("1234").unwrap(), Score::new(1, 2));
        history.record(rules.parse_guess("4271").unwrap(), Score::new(4, 0));

        let numbered: Vec<_> = history
            .numbered()
            .map(|(n, e)| (n, e.guess.text().to_string(), e.score))
            .collect();
        assert_eq!(
            numbered,
            vec![
                (1, "1234".to_string(), Score::new(1, 2)),
                (2, "4271".to_string(), Score::new(4, 0)),
            ]
        );
        assert_eq!(history.len(), 2);
    }
}
