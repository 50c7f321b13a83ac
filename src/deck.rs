//! Deck loading and the shuffled question draw pile.

use alloc::string::ToString;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LoadError;
use crate::question::{Deck, Question, TOP_SIZE};

/// Something that can supply the deck catalog.
///
/// Returning `Ok(Vec::new())` means the source is reachable but has no decks
/// configured; failures to reach or parse the data are errors.
pub trait DeckSource {
    /// Loads every deck the source knows about.
    ///
    /// # Errors
    ///
    /// Returns an error if the data is unreachable or malformed.
    fn load_decks(&self) -> Result<Vec<Deck>, LoadError>;
}

#[derive(Deserialize)]
struct Catalog {
    decks: Vec<Deck>,
}

/// Parses a deck catalog of the form
/// `{"decks": [{"theme": .., "questions": [{"category": .., "top10": [..]}]}]}`.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] if the JSON does not match the catalog
/// shape, or [`LoadError::InvalidQuestion`] if a question does not have
/// exactly ten answers.
pub fn parse_decks(json: &str) -> Result<Vec<Deck>, LoadError> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|err| LoadError::Malformed(err.to_string()))?;

    for (deck_index, deck) in catalog.decks.iter().enumerate() {
        if let Some(question_index) = deck.questions.iter().position(|q| q.len() != TOP_SIZE) {
            return Err(LoadError::InvalidQuestion {
                deck: deck_index,
                question: question_index,
            });
        }
    }

    debug!(decks = catalog.decks.len(), "Parsed deck catalog");
    Ok(catalog.decks)
}

/// A deck source backed by a JSON string already in memory.
#[derive(Debug, Clone, Copy)]
pub struct JsonDeckSource<'a>(pub &'a str);

impl DeckSource for JsonDeckSource<'_> {
    fn load_decks(&self) -> Result<Vec<Deck>, LoadError> {
        parse_decks(self.0)
    }
}

/// A deck source backed by a JSON file.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct FileDeckSource(pub std::path::PathBuf);

#[cfg(feature = "std")]
impl DeckSource for FileDeckSource {
    fn load_decks(&self) -> Result<Vec<Deck>, LoadError> {
        let json = std::fs::read_to_string(&self.0)
            .map_err(|err| LoadError::Unavailable(err.to_string()))?;
        parse_decks(&json)
    }
}

/// Returns a uniformly shuffled copy of the deck's questions.
pub fn draw_order<R: Rng + ?Sized>(deck: &Deck, rng: &mut R) -> Vec<Question> {
    let mut order = deck.questions.clone();
    order.shuffle(rng);
    order
}

/// The questions of the selected deck in draw order.
///
/// Questions are handed out without repetition; once the order is exhausted
/// the deck is reshuffled and the cursor starts over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawPile {
    /// The deck being drawn from.
    pub deck: Option<Deck>,
    /// Current permutation of the deck.
    pub order: Vec<Question>,
    /// Index of the next question in `order`.
    pub cursor: usize,
}

impl DrawPile {
    /// Creates a draw pile with a fresh permutation of `deck`.
    pub fn new<R: Rng + ?Sized>(deck: Deck, rng: &mut R) -> Self {
        let order = draw_order(&deck, rng);
        Self {
            deck: Some(deck),
            order,
            cursor: 0,
        }
    }

    /// Draws the next question, reshuffling once the order is exhausted.
    ///
    /// Returns `None` only when no deck is selected or the deck is empty.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Question> {
        if self.cursor >= self.order.len() {
            let deck = self.deck.as_ref()?;
            self.order = draw_order(deck, rng);
            self.cursor = 0;
            debug!(theme = %deck.theme, "Question deck reshuffled");
        }

        let question = self.order.get(self.cursor).cloned()?;
        self.cursor += 1;
        Some(question)
    }

    /// Returns how many questions are left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len().saturating_sub(self.cursor)
    }

    /// Empties the pile.
    pub fn clear(&mut self) {
        self.deck = None;
        self.order.clear();
        self.cursor = 0;
    }
}
