//! Questions and decks.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_answer;

/// Number of ranked answers behind every question.
pub const TOP_SIZE: usize = 10;

/// A category with its ranked Top 10 answers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    /// The category shown to the players.
    pub category: String,
    /// Answers in rank order (rank 1 is index 0).
    pub top10: Vec<String>,
}

impl Question {
    /// Creates a new question.
    #[must_use]
    pub fn new<S: Into<String>>(category: S, top10: Vec<String>) -> Self {
        Self {
            category: category.into(),
            top10,
        }
    }

    /// Returns the 0-based rank that `guess` matches, if any.
    ///
    /// Matching ignores case, accents, and surrounding whitespace.
    #[must_use]
    pub fn rank_of(&self, guess: &str) -> Option<usize> {
        let guess = normalize_answer(guess);
        self.top10
            .iter()
            .position(|item| normalize_answer(item) == guess)
    }

    /// Returns whether `guess` is on the list.
    #[must_use]
    pub fn is_correct(&self, guess: &str) -> bool {
        self.rank_of(guess).is_some()
    }

    /// Returns the answer at a 0-based rank.
    #[must_use]
    pub fn answer(&self, rank: usize) -> Option<&str> {
        self.top10.get(rank).map(String::as_str)
    }

    /// Returns the number of ranked answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top10.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.top10.is_empty()
    }
}

/// A themed set of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// The deck's theme.
    pub theme: String,
    /// Questions in the deck.
    pub questions: Vec<Question>,
}

impl Deck {
    /// Creates a new deck.
    #[must_use]
    pub fn new<S: Into<String>>(theme: S, questions: Vec<Question>) -> Self {
        Self {
            theme: theme.into(),
            questions,
        }
    }
}
