//! Outcome types returned by game actions.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Only one player was left in the round.
    LastPlayerStanding,
    /// Everyone was out of the round; the last player to guess took the card.
    LastGuesser,
    /// Everyone was out of the round and nobody could take the card.
    NoWinner,
    /// A challenger caught a wrong guess.
    ChallengeWon,
    /// Every item on the list was revealed.
    ListRevealed,
}

/// Summary of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEnd {
    /// The round that just ended.
    pub round: u32,
    /// The player who won the round's card, if anyone.
    pub winner: Option<u8>,
    /// Why the round ended.
    pub reason: RoundEndReason,
    /// The player who opens the next round.
    pub next_starter: Option<u8>,
}

/// Where play stands after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The round goes on with this player to act.
    Continue {
        /// The player whose turn it is.
        next_player: u8,
    },
    /// The round is over; call [`Game::next_round`](crate::Game::next_round).
    RoundEnded(RoundEnd),
    /// The game is over.
    GameOver {
        /// The winning player.
        winner: u8,
    },
}

/// Result of accepting a guess without a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptOutcome {
    /// Whether the guess was on the list.
    pub correct: bool,
    /// The 0-based rank the guess matched.
    pub rank: Option<usize>,
    /// Where play stands afterwards.
    pub turn: TurnOutcome,
}

/// Result of resolving a challenge, with everything needed for the reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResolution {
    /// The guess as it was entered.
    pub guess: String,
    /// Whether the guess was on the list.
    pub correct: bool,
    /// The 0-based rank the guess matched.
    pub rank: Option<usize>,
    /// The player who made the guess.
    pub guesser: u8,
    /// The player who challenged it.
    pub challenger: u8,
    /// The player who lost a life.
    pub life_lost_by: u8,
    /// Whether that player was eliminated by it.
    pub eliminated: bool,
    /// The full Top 10 list.
    pub top10: Vec<String>,
    /// Where play stands afterwards.
    pub turn: TurnOutcome,
}

/// A player's place in the final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based place.
    pub place: usize,
    /// The player ID.
    pub player_id: u8,
    /// The player's name.
    pub name: String,
    /// Cards won.
    pub cards: u8,
    /// Lives left.
    pub lives: u8,
    /// Whether the player was eliminated.
    pub eliminated: bool,
}
