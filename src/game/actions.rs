use alloc::borrow::ToOwned;
use alloc::vec::Vec;

use tracing::{debug, info, warn};

use crate::error::{ActionError, ChallengeError};
use crate::observer::Feedback;
use crate::player::Player;
use crate::result::{AcceptOutcome, TurnOutcome};

use super::round::Settle;
use super::state::{RoundState, is_active};
use super::{Game, Phase};

/// Everyone who may challenge `guesser`'s guess.
fn challengers(players: &[Player], round: &RoundState, guesser: u8) -> Vec<u8> {
    players
        .iter()
        .filter(|p| p.id != guesser && is_active(p, round))
        .map(|p| p.id)
        .collect()
}

impl Game {
    fn ensure_player_turn(&self, player_id: u8) -> Result<(), ActionError> {
        if *self.phase.lock() != Phase::AwaitingTurnAction {
            return Err(ActionError::InvalidState);
        }

        let (is_current, still_in) = {
            let players = self.players.lock();
            let round = self.round.lock();
            let round = round.as_ref().ok_or(ActionError::InvalidState)?;
            let seat = players
                .iter()
                .position(|p| p.id == player_id)
                .ok_or(ActionError::PlayerNotFound)?;
            (
                seat == *self.current_index.lock(),
                is_active(&players[seat], round),
            )
        };

        if !is_current {
            return Err(ActionError::NotYourTurn);
        }

        debug_assert!(still_in, "player {player_id} holds the turn while out of the round");
        if !still_in {
            warn!(player_id, "Turn held by a player who is out of the round");
            self.settle(Settle::Normal);
            self.publish();
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Submits a guess for the current player.
    ///
    /// The guess then waits for the table to challenge or accept it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a turn action, it is
    /// not the player's turn, the player cannot be found, or the guess is
    /// blank.
    pub fn guess(&self, player_id: u8, text: &str) -> Result<(), ActionError> {
        self.ensure_player_turn(player_id)?;

        let guess = text.trim();
        if guess.is_empty() {
            return Err(ActionError::EmptyGuess);
        }

        {
            let mut round = self.round.lock();
            let round = round.as_mut().ok_or(ActionError::InvalidState)?;
            round.current_guess = Some(guess.to_owned());
            round.guesser = Some(player_id);
            round.challenger = None;
            round.last_guesser = Some(player_id);
        }
        *self.phase.lock() = Phase::AwaitingChallengeDecision;

        debug!(player_id, guess, "Guess submitted");
        self.publish();
        Ok(())
    }

    /// Passes: the current player sits out the rest of the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a turn action, it is
    /// not the player's turn, or the player cannot be found.
    pub fn pass(&self, player_id: u8) -> Result<TurnOutcome, ActionError> {
        self.ensure_player_turn(player_id)?;

        if let Some(round) = self.round.lock().as_mut() {
            round.mark_passed(player_id);
        }
        debug!(player_id, "Player passed");

        let outcome = self.settle(Settle::Normal);
        self.publish();
        Ok(outcome)
    }

    /// Returns the players who may challenge the pending guess.
    ///
    /// Empty outside of a challenge window.
    pub fn eligible_challengers(&self) -> Vec<u8> {
        if self.phase() != Phase::AwaitingChallengeDecision {
            return Vec::new();
        }
        let players = self.players.lock();
        let round = self.round.lock();
        round
            .as_ref()
            .and_then(|round| round.guesser.map(|g| challengers(&players, round, g)))
            .unwrap_or_default()
    }

    /// Challenges the pending guess.
    ///
    /// Call [`Game::resolve`] afterwards to reveal the verdict.
    ///
    /// # Errors
    ///
    /// Returns an error if no guess is waiting for a decision, nobody is able
    /// to challenge, or the named challenger is unknown, the guesser,
    /// eliminated, or already out of the round.
    pub fn challenge(&self, challenger_id: u8) -> Result<(), ChallengeError> {
        if *self.phase.lock() != Phase::AwaitingChallengeDecision {
            return Err(ChallengeError::InvalidState);
        }

        let guesser = {
            let players = self.players.lock();
            let mut round = self.round.lock();
            let round = round.as_mut().ok_or(ChallengeError::InvalidState)?;
            let guesser = round.guesser.ok_or(ChallengeError::InvalidState)?;

            if challengers(&players, round, guesser).is_empty() {
                return Err(ChallengeError::NoEligibleChallenger);
            }

            let challenger = players
                .iter()
                .find(|p| p.id == challenger_id)
                .ok_or(ChallengeError::PlayerNotFound)?;
            if challenger.id == guesser {
                return Err(ChallengeError::SelfChallenge);
            }
            if challenger.is_eliminated() {
                return Err(ChallengeError::ChallengerEliminated);
            }
            if round.has_passed(challenger.id) {
                return Err(ChallengeError::ChallengerPassed);
            }

            round.challenger = Some(challenger_id);
            guesser
        };
        *self.phase.lock() = Phase::AwaitingResolution;

        info!(guesser, challenger = challenger_id, "Challenge raised");
        self.emit(Feedback::ChallengeRaised {
            guesser,
            challenger: challenger_id,
        });
        self.publish();
        Ok(())
    }

    /// Accepts the pending guess without a challenge.
    ///
    /// A correct guess is revealed; nobody gains or loses anything.
    ///
    /// # Errors
    ///
    /// Returns an error if no guess is waiting for a decision.
    pub fn accept(&self) -> Result<AcceptOutcome, ActionError> {
        if *self.phase.lock() != Phase::AwaitingChallengeDecision {
            return Err(ActionError::InvalidState);
        }

        let (guesser, rank) = {
            let round = self.round.lock();
            let round = round.as_ref().ok_or(ActionError::InvalidState)?;
            let guess = round
                .current_guess
                .as_deref()
                .ok_or(ActionError::NoPendingGuess)?;
            let guesser = round.guesser.ok_or(ActionError::NoPendingGuess)?;
            (guesser, round.question.rank_of(guess))
        };

        let turn = self.apply_accept_outcome(guesser, rank);
        self.publish();
        Ok(AcceptOutcome {
            correct: rank.is_some(),
            rank,
            turn,
        })
    }
}
