//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// A game is already in progress.
    #[error("a game is already in progress")]
    InvalidState,
    /// The options leave no playable game (no lives, no cards to win, or a
    /// table smaller than two).
    #[error("invalid game options")]
    InvalidOptions,
    /// Fewer than two players were named.
    #[error("at least two players are required")]
    TooFewPlayers,
    /// More players than the table allows.
    #[error("too many players (maximum is {max})")]
    TooManyPlayers {
        /// Configured maximum.
        max: u8,
    },
    /// A player name is empty or only whitespace.
    #[error("player names cannot be empty")]
    EmptyName,
    /// Two players share the same name.
    #[error("player names must be distinct")]
    DuplicateName,
    /// No decks have been loaded.
    #[error("no decks are loaded")]
    NoDecks,
    /// The selected deck does not exist.
    #[error("deck not found")]
    DeckNotFound,
    /// The selected deck has no questions.
    #[error("the selected deck has no questions")]
    EmptyDeck,
}

/// Errors that can occur during turn actions (guess, pass, accept, resolve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The guess text is empty.
    #[error("the guess cannot be empty")]
    EmptyGuess,
    /// There is no guess waiting for a decision.
    #[error("there is no pending guess")]
    NoPendingGuess,
}

/// Errors that can occur when raising a challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// Invalid game state for a challenge.
    #[error("invalid game state for a challenge")]
    InvalidState,
    /// Challenger not found.
    #[error("challenger not found")]
    PlayerNotFound,
    /// The guesser tried to challenge their own guess.
    #[error("players cannot challenge their own guess")]
    SelfChallenge,
    /// The challenger has been eliminated.
    #[error("the challenger has been eliminated")]
    ChallengerEliminated,
    /// The challenger already passed or lost a challenge this round.
    #[error("the challenger is out of this round")]
    ChallengerPassed,
    /// Nobody at the table is able to challenge.
    #[error("no player is eligible to challenge")]
    NoEligibleChallenger,
}

/// Errors that can occur while loading question decks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The data source could not be reached.
    #[error("question data is unavailable: {0}")]
    Unavailable(String),
    /// The data could not be parsed.
    #[error("question data is malformed: {0}")]
    Malformed(String),
    /// A question does not carry a full Top 10 list.
    #[error("deck {deck} question {question} does not have a full Top 10 list")]
    InvalidQuestion {
        /// Deck index in the catalog.
        deck: usize,
        /// Question index in the deck.
        question: usize,
    },
}

/// Errors that can occur while saving or restoring a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The snapshot was written by an incompatible version.
    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u32),
    /// The snapshot could not be parsed.
    #[error("snapshot is malformed: {0}")]
    Malformed(String),
    /// The snapshot parsed but describes an impossible game.
    #[error("snapshot describes an inconsistent game")]
    Inconsistent,
    /// The backing store failed.
    #[error("snapshot storage failed: {0}")]
    Storage(String),
}
