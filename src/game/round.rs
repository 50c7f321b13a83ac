use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::error::ActionError;
use crate::observer::Feedback;
use crate::options::{GameMode, MIN_PLAYERS};
use crate::player::Player;
use crate::result::{RoundEnd, RoundEndReason, TurnOutcome};

use super::state::{RoundState, active_players, is_active, next_seat};
use super::{Game, Phase};

/// How the round-end check treats a single remaining player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Settle {
    /// A lone active player takes the round's card.
    Normal,
    /// A guesser left alone by a failed challenge keeps playing.
    KeepLoneGuesser,
}

/// Returns `seat` if that player is still in the game, otherwise the next
/// seat that is.
fn surviving_seat(players: &[Player], seat: usize) -> usize {
    if players.get(seat).is_some_and(|p| !p.is_eliminated()) {
        return seat;
    }
    next_seat(players, seat, |p| !p.is_eliminated()).unwrap_or(seat)
}

/// Returns the first seat after `seat` whose player is still in the game.
fn seat_after(players: &[Player], seat: usize) -> usize {
    next_seat(players, seat, |p| !p.is_eliminated()).unwrap_or(seat)
}

impl Game {
    /// Deals the next question once a round has ended.
    ///
    /// Returns the ID of the player who opens the new round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not between rounds.
    pub fn next_round(&self) -> Result<u8, ActionError> {
        if *self.phase.lock() != Phase::RoundEnded {
            return Err(ActionError::InvalidState);
        }

        let starter = self.deal_round().ok_or(ActionError::InvalidState)?;
        self.publish();
        Ok(starter)
    }

    /// Draws a question and seats everyone still in the game for a new round.
    pub(super) fn deal_round(&self) -> Option<u8> {
        let question = {
            let mut rng = self.rng.lock();
            self.draw_pile.lock().next_question(&mut *rng)
        }?;

        let players = self.players.lock();
        let requested = self.next_starter.lock().take().unwrap_or(0);
        let starter = surviving_seat(&players, requested);
        let starter_id = players.get(starter).map(|p| p.id);
        let round = RoundState::new(question, &players);
        drop(players);

        let round_number = *self.round_number.lock();
        info!(
            round = round_number,
            category = %round.question.category,
            starter = ?starter_id,
            "Round started"
        );

        *self.round.lock() = Some(round);
        *self.current_index.lock() = starter;
        *self.phase.lock() = Phase::AwaitingTurnAction;

        starter_id
    }

    /// Hands the turn to the next player who is neither eliminated nor out of
    /// the round.
    ///
    /// Returns `None` and leaves the turn where it is if nobody is eligible.
    pub(super) fn move_to_next_player(&self) -> Option<u8> {
        let players = self.players.lock();
        let round = self.round.lock();
        let round = round.as_ref()?;
        let mut index = self.current_index.lock();

        let next = next_seat(&players, *index, |p| is_active(p, round))?;
        *index = next;
        Some(players[next].id)
    }

    /// Decides whether the round goes on after a pass, an accepted guess, or
    /// a resolved challenge, and applies the result.
    pub(super) fn settle(&self, settle: Settle) -> TurnOutcome {
        let (list_done, active, survivors, last_guesser, current) = {
            let players = self.players.lock();
            let guard = self.round.lock();
            debug_assert!(guard.is_some(), "round-end check without a round in play");
            let Some(round) = guard.as_ref() else {
                warn!("Round-end check without a round in play");
                drop(guard);
                drop(players);
                return self.finish_round(None, RoundEndReason::NoWinner, 0);
            };

            let list_done = self.options.mode == GameMode::ListReveal && round.all_revealed();
            let last_guesser = round
                .last_guesser
                .filter(|id| players.iter().any(|p| p.id == *id && !p.is_eliminated()));
            let survivors: Vec<u8> = players
                .iter()
                .filter(|p| !p.is_eliminated())
                .map(|p| p.id)
                .collect();
            (
                list_done,
                active_players(&players, round),
                survivors,
                last_guesser,
                *self.current_index.lock(),
            )
        };

        if let [survivor] = survivors.as_slice() {
            return self.award_round(*survivor, RoundEndReason::LastPlayerStanding);
        }

        if list_done {
            let starter = seat_after(&self.players.lock(), current);
            return self.finish_round(None, RoundEndReason::ListRevealed, starter);
        }

        match (active.as_slice(), settle) {
            ([winner], Settle::Normal) => {
                self.award_round(*winner, RoundEndReason::LastPlayerStanding)
            }
            ([], _) => {
                if let Some(guesser) = last_guesser {
                    self.award_round(guesser, RoundEndReason::LastGuesser)
                } else {
                    let starter = surviving_seat(&self.players.lock(), current);
                    self.finish_round(None, RoundEndReason::NoWinner, starter)
                }
            }
            _ => {
                let next = self.move_to_next_player();
                debug_assert!(next.is_some(), "active players but nobody to rotate to");
                if let Some(next_player) = next {
                    *self.phase.lock() = Phase::AwaitingTurnAction;
                    debug!(next_player, active = active.len(), "Turn passed");
                    TurnOutcome::Continue { next_player }
                } else {
                    warn!("No eligible player to rotate to; ending round");
                    let starter = surviving_seat(&self.players.lock(), current);
                    self.finish_round(None, RoundEndReason::NoWinner, starter)
                }
            }
        }
    }

    /// Gives the round's card to `winner_id` and ends the round, or the game
    /// if that card wins it.
    pub(super) fn award_round(&self, winner_id: u8, reason: RoundEndReason) -> TurnOutcome {
        let seat = self.seat_of(winner_id);
        debug_assert!(seat.is_some(), "round winner {winner_id} is not seated");
        let Some(seat) = seat else {
            warn!(winner_id, "Round winner is not seated");
            let current = *self.current_index.lock();
            return self.finish_round(None, RoundEndReason::NoWinner, current);
        };

        if let Some(player) = self.players.lock().get_mut(seat) {
            player.gain_card();
        }
        info!(player_id = winner_id, ?reason, "Round won");
        self.emit(Feedback::RoundWon {
            player_id: winner_id,
        });

        if self.conclude_if_won(winner_id) {
            return TurnOutcome::GameOver { winner: winner_id };
        }

        let starter = seat_after(&self.players.lock(), seat);
        self.finish_round(Some(winner_id), reason, starter)
    }

    /// Closes the round and records who opens the next one.
    ///
    /// Ends the game instead when fewer than two players remain.
    pub(super) fn finish_round(
        &self,
        winner: Option<u8>,
        reason: RoundEndReason,
        starter: usize,
    ) -> TurnOutcome {
        let survivors: Vec<u8> = self
            .players
            .lock()
            .iter()
            .filter(|p| !p.is_eliminated())
            .map(|p| p.id)
            .collect();

        if survivors.len() < MIN_PLAYERS {
            let last_standing = survivors.first().copied().or_else(|| self.leader());
            if let Some(last_standing) = last_standing {
                info!(player_id = last_standing, "Last player standing");
                return self.conclude(last_standing);
            }
        }

        if let Some(round) = self.round.lock().as_mut() {
            round.clear_pending();
        }

        let ended = {
            let mut number = self.round_number.lock();
            let ended = *number;
            *number = number.saturating_add(1);
            ended
        };
        let next_starter = self.players.lock().get(starter).map(|p| p.id);
        *self.next_starter.lock() = Some(starter);
        *self.phase.lock() = Phase::RoundEnded;

        info!(round = ended, ?winner, ?reason, ?next_starter, "Round ended");

        TurnOutcome::RoundEnded(RoundEnd {
            round: ended,
            winner,
            reason,
            next_starter,
        })
    }
}
