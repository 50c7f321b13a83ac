//! Game phase and per-round state.

use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::question::Question;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game running; players and deck are being chosen.
    Setup,
    /// The current player may guess or pass.
    AwaitingTurnAction,
    /// A guess is on the table; it may be challenged or accepted.
    AwaitingChallengeDecision,
    /// A challenge was raised and waits to be resolved.
    AwaitingResolution,
    /// The round is over; the next one has not been dealt yet.
    RoundEnded,
    /// A winner has been declared.
    GameOver,
}

/// A player's standing within the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPlayerState {
    /// The player ID.
    pub player_id: u8,
    /// Whether the player is out of this round.
    pub passed: bool,
}

/// Transient state of the round being played.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// The question for this round.
    pub question: Question,
    /// 0-based ranks revealed so far, in reveal order.
    pub revealed: Vec<usize>,
    /// The guess waiting for a decision.
    pub current_guess: Option<String>,
    /// The player who made the pending guess.
    pub guesser: Option<u8>,
    /// The player who challenged the pending guess.
    pub challenger: Option<u8>,
    /// The last player to guess this round.
    pub last_guesser: Option<u8>,
    /// Everyone who was still in the game when the round started.
    pub players: Vec<RoundPlayerState>,
}

impl RoundState {
    /// Starts a round for every non-eliminated player.
    #[must_use]
    pub fn new(question: Question, players: &[Player]) -> Self {
        Self {
            question,
            revealed: Vec::new(),
            current_guess: None,
            guesser: None,
            challenger: None,
            last_guesser: None,
            players: players
                .iter()
                .filter(|p| !p.is_eliminated())
                .map(|p| RoundPlayerState {
                    player_id: p.id,
                    passed: false,
                })
                .collect(),
        }
    }

    /// Returns whether a player has been marked out of the round.
    ///
    /// Players who were eliminated before the round began count as passed.
    #[must_use]
    pub fn has_passed(&self, player_id: u8) -> bool {
        self.players
            .iter()
            .find(|p| p.player_id == player_id)
            .is_none_or(|p| p.passed)
    }

    /// Marks a player out of the round.
    pub fn mark_passed(&mut self, player_id: u8) {
        if let Some(state) = self.players.iter_mut().find(|p| p.player_id == player_id) {
            state.passed = true;
        }
    }

    /// Records a revealed rank. Returns `false` if it was already revealed.
    pub fn reveal(&mut self, rank: usize) -> bool {
        if rank >= self.question.len() || self.revealed.contains(&rank) {
            return false;
        }
        self.revealed.push(rank);
        true
    }

    /// Returns whether a rank has been revealed.
    #[must_use]
    pub fn is_revealed(&self, rank: usize) -> bool {
        self.revealed.contains(&rank)
    }

    /// Returns whether every item on the list has been revealed.
    #[must_use]
    pub fn all_revealed(&self) -> bool {
        !self.question.is_empty() && self.revealed.len() >= self.question.len()
    }

    pub(crate) fn clear_pending(&mut self) {
        self.current_guess = None;
        self.guesser = None;
        self.challenger = None;
    }
}

/// Returns whether `player` can still act in the round.
pub(crate) fn is_active(player: &Player, round: &RoundState) -> bool {
    !player.is_eliminated() && !round.has_passed(player.id)
}

/// Returns the IDs of everyone who can still act in the round, in seat order.
pub(crate) fn active_players(players: &[Player], round: &RoundState) -> Vec<u8> {
    players
        .iter()
        .filter(|p| is_active(p, round))
        .map(|p| p.id)
        .collect()
}

/// Scans forward from the seat after `from` for the first player that
/// satisfies `eligible`, wrapping around at most once.
pub(crate) fn next_seat<F>(players: &[Player], from: usize, eligible: F) -> Option<usize>
where
    F: Fn(&Player) -> bool,
{
    let count = players.len();
    (1..=count)
        .map(|offset| (from + offset) % count)
        .find(|&index| eligible(&players[index]))
}
