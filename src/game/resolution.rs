use tracing::info;

use crate::error::ActionError;
use crate::observer::Feedback;
use crate::options::AcceptRule;
use crate::result::{ChallengeResolution, RoundEndReason, TurnOutcome};

use super::round::Settle;
use super::{Game, Phase};

impl Game {
    /// Resolves the raised challenge.
    ///
    /// If the guess was on the list, the challenger loses a life and sits out
    /// the rest of the round, the item is revealed, and play moves on. If it
    /// was not, the guesser loses a life, the challenger wins the round's card,
    /// and the round ends with the challenger opening the next one.
    ///
    /// The returned resolution carries the full list for the reveal.
    ///
    /// # Errors
    ///
    /// Returns an error if no challenge is waiting to be resolved.
    pub fn resolve(&self) -> Result<ChallengeResolution, ActionError> {
        if *self.phase.lock() != Phase::AwaitingResolution {
            return Err(ActionError::InvalidState);
        }

        let (guess, guesser, challenger, rank, top10) = {
            let round = self.round.lock();
            let round = round.as_ref().ok_or(ActionError::InvalidState)?;
            let guess = round
                .current_guess
                .clone()
                .ok_or(ActionError::NoPendingGuess)?;
            let guesser = round.guesser.ok_or(ActionError::NoPendingGuess)?;
            let challenger = round.challenger.ok_or(ActionError::NoPendingGuess)?;
            let rank = round.question.rank_of(&guess);
            (guess, guesser, challenger, rank, round.question.top10.clone())
        };

        self.emit(if rank.is_some() {
            Feedback::ChallengeCorrect
        } else {
            Feedback::ChallengeIncorrect
        });

        let (life_lost_by, eliminated, turn) =
            self.apply_challenge_outcome(guesser, challenger, rank);
        self.publish();

        Ok(ChallengeResolution {
            guess,
            correct: rank.is_some(),
            rank,
            guesser,
            challenger,
            life_lost_by,
            eliminated,
            top10,
            turn,
        })
    }

    /// Applies the consequences of a resolved challenge.
    ///
    /// Returns who lost a life, whether it eliminated them, and where play
    /// stands afterwards.
    fn apply_challenge_outcome(
        &self,
        guesser: u8,
        challenger: u8,
        rank: Option<usize>,
    ) -> (u8, bool, TurnOutcome) {
        if let Some(rank) = rank {
            let eliminated = self.take_life(challenger);
            if let Some(round) = self.round.lock().as_mut() {
                round.reveal(rank);
                round.mark_passed(challenger);
                round.clear_pending();
            }
            info!(
                guesser,
                challenger,
                rank = rank + 1,
                eliminated,
                "Challenge lost: the guess is on the list"
            );
            return (challenger, eliminated, self.settle(Settle::KeepLoneGuesser));
        }

        let eliminated = self.take_life(guesser);
        if let Some(player) = self
            .players
            .lock()
            .iter_mut()
            .find(|p| p.id == challenger)
        {
            player.gain_card();
        }
        info!(
            guesser,
            challenger, eliminated, "Challenge won: the guess is not on the list"
        );
        self.emit(Feedback::RoundWon {
            player_id: challenger,
        });

        if self.conclude_if_won(challenger) {
            return (
                guesser,
                eliminated,
                TurnOutcome::GameOver { winner: challenger },
            );
        }

        if let Some(round) = self.round.lock().as_mut() {
            round.mark_passed(guesser);
        }
        let starter = self
            .seat_of(challenger)
            .unwrap_or_else(|| *self.current_index.lock());
        let turn = self.finish_round(Some(challenger), RoundEndReason::ChallengeWon, starter);
        (guesser, eliminated, turn)
    }

    /// Applies an unchallenged guess and moves play on.
    pub(super) fn apply_accept_outcome(&self, guesser: u8, rank: Option<usize>) -> TurnOutcome {
        if let Some(round) = self.round.lock().as_mut() {
            match rank {
                Some(rank) => {
                    round.reveal(rank);
                }
                None if self.options.accept_rule == AcceptRule::Strict => {
                    round.mark_passed(guesser);
                }
                None => {}
            }
            round.clear_pending();
        }
        info!(guesser, correct = rank.is_some(), "Guess accepted");

        self.settle(Settle::Normal)
    }

    /// Takes a life from a player. Returns `true` if it eliminated them.
    fn take_life(&self, player_id: u8) -> bool {
        let mut players = self.players.lock();
        let Some(player) = players.iter_mut().find(|p| p.id == player_id) else {
            return false;
        };
        let eliminated = player.lose_life();
        if eliminated {
            info!(player_id, "Player eliminated");
        }
        eliminated
    }
}
