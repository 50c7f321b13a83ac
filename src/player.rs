//! Player registry entries.

use alloc::string::String;

use serde::{Deserialize, Serialize};

/// A player at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Stable identifier for the lifetime of the game.
    pub id: u8,
    /// Display name.
    pub name: String,
    /// Remaining lives.
    lives: u8,
    /// Cards won (the score).
    cards: u8,
    /// Whether the player has run out of lives.
    eliminated: bool,
}

impl Player {
    /// Creates a new player with the given number of lives and no cards.
    #[must_use]
    pub fn new<S: Into<String>>(id: u8, name: S, lives: u8) -> Self {
        Self {
            id,
            name: name.into(),
            lives,
            cards: 0,
            eliminated: lives == 0,
        }
    }

    /// Returns the remaining lives.
    #[must_use]
    pub const fn lives(&self) -> u8 {
        self.lives
    }

    /// Returns the number of cards won.
    #[must_use]
    pub const fn cards(&self) -> u8 {
        self.cards
    }

    /// Returns whether the player is out of the game.
    #[must_use]
    pub const fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Takes one life. Returns `true` if this eliminated the player.
    pub(crate) const fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        let newly_eliminated = self.lives == 0 && !self.eliminated;
        if self.lives == 0 {
            self.eliminated = true;
        }
        newly_eliminated
    }

    /// Awards one card.
    pub(crate) const fn gain_card(&mut self) {
        self.cards = self.cards.saturating_add(1);
    }
}
