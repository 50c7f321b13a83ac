use alloc::vec::Vec;
use core::cmp::Reverse;

use tracing::info;

use crate::error::ActionError;
use crate::player::Player;
use crate::result::{Standing, TurnOutcome};

use super::{Game, Phase};

/// Orders players by cards, then lives, keeping seat order among exact ties.
fn ranked(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_key(|p| (Reverse(p.cards()), Reverse(p.lives())));
    ranked
}

impl Game {
    /// Returns whether the player has enough cards to win, ending the game
    /// with them as winner if so.
    pub fn check_win_condition(&self, player_id: u8) -> bool {
        let was_over = self.phase() == Phase::GameOver;
        let won = self.conclude_if_won(player_id);
        if won && !was_over {
            self.publish();
        }
        won
    }

    /// Ends the game if the player has reached the winning card count.
    /// Leaves publishing to the caller.
    pub(super) fn conclude_if_won(&self, player_id: u8) -> bool {
        let won = self
            .get_player(player_id)
            .is_some_and(|p| p.cards() >= self.options.winning_cards);
        if won && self.phase() != Phase::GameOver {
            self.conclude(player_id);
        }
        won
    }

    /// Ends the game early with the given winner.
    ///
    /// Returns the final standings.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is running or the player is unknown.
    pub fn end_game(&self, winner_id: u8) -> Result<Vec<Standing>, ActionError> {
        if matches!(self.phase(), Phase::Setup | Phase::GameOver) {
            return Err(ActionError::InvalidState);
        }
        if self.seat_of(winner_id).is_none() {
            return Err(ActionError::PlayerNotFound);
        }

        self.conclude(winner_id);
        self.publish();
        Ok(self.final_standings())
    }

    /// Returns the standings: most cards first, then most lives, then seat
    /// order.
    pub fn final_standings(&self) -> Vec<Standing> {
        let players = self.players.lock();
        ranked(&players)
            .into_iter()
            .enumerate()
            .map(|(index, p)| Standing {
                place: index + 1,
                player_id: p.id,
                name: p.name.clone(),
                cards: p.cards(),
                lives: p.lives(),
                eliminated: p.is_eliminated(),
            })
            .collect()
    }

    /// Returns the player currently leading the standings.
    pub(super) fn leader(&self) -> Option<u8> {
        ranked(&self.players.lock()).first().map(|p| p.id)
    }

    /// Freezes play with `winner` as the winner.
    pub(super) fn conclude(&self, winner: u8) -> TurnOutcome {
        if let Some(round) = self.round.lock().as_mut() {
            round.clear_pending();
        }
        *self.next_starter.lock() = None;
        *self.winner.lock() = Some(winner);
        *self.phase.lock() = Phase::GameOver;

        info!(winner, "Game over");
        TurnOutcome::GameOver { winner }
    }
}
