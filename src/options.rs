//! Game configuration options.

use serde::{Deserialize, Serialize};

/// Which rule variant ends a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum GameMode {
    /// Rounds end when at most one player is left in them.
    #[default]
    Elimination,
    /// Like [`GameMode::Elimination`], and a round also ends once every item
    /// of the Top 10 list has been revealed.
    ListReveal,
}

/// What happens to a wrong guess that nobody challenged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AcceptRule {
    /// House rule: the wrong guess goes unpunished and the guesser stays in
    /// the round.
    #[default]
    Lenient,
    /// The guesser is out of the round, as if they had passed.
    Strict,
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use topten::{GameMode, GameOptions};
///
/// let options = GameOptions::default()
///     .with_starting_lives(3)
///     .with_winning_cards(5)
///     .with_mode(GameMode::ListReveal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Lives each player starts with.
    pub starting_lives: u8,
    /// Cards needed to win the game.
    pub winning_cards: u8,
    /// Maximum number of players at the table.
    pub max_players: u8,
    /// Round-end rule variant.
    pub mode: GameMode,
    /// Treatment of accepted wrong guesses.
    pub accept_rule: AcceptRule,
}

/// Minimum number of players for a game.
pub const MIN_PLAYERS: usize = 2;

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_lives: 4,
            winning_cards: 4,
            max_players: 10,
            mode: GameMode::Elimination,
            accept_rule: AcceptRule::Lenient,
        }
    }
}

impl GameOptions {
    /// Sets the number of lives each player starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_lives(2);
    /// assert_eq!(options.starting_lives, 2);
    /// ```
    #[must_use]
    pub const fn with_starting_lives(mut self, lives: u8) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Sets the number of cards needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_cards(3);
    /// assert_eq!(options.winning_cards, 3);
    /// ```
    #[must_use]
    pub const fn with_winning_cards(mut self, cards: u8) -> Self {
        self.winning_cards = cards;
        self
    }

    /// Sets the maximum number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_players(6);
    /// assert_eq!(options.max_players, 6);
    /// ```
    #[must_use]
    pub const fn with_max_players(mut self, max: u8) -> Self {
        self.max_players = max;
        self
    }

    /// Sets the round-end rule variant.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::{GameMode, GameOptions};
    ///
    /// let options = GameOptions::default().with_mode(GameMode::ListReveal);
    /// assert_eq!(options.mode, GameMode::ListReveal);
    /// ```
    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets how accepted wrong guesses are treated.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::{AcceptRule, GameOptions};
    ///
    /// let options = GameOptions::default().with_accept_rule(AcceptRule::Strict);
    /// assert_eq!(options.accept_rule, AcceptRule::Strict);
    /// ```
    #[must_use]
    pub const fn with_accept_rule(mut self, rule: AcceptRule) -> Self {
        self.accept_rule = rule;
        self
    }
}
