use core::sync::atomic::Ordering;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use crate::error::SnapshotError;
use crate::snapshot::{GameSnapshot, RngPosition, SNAPSHOT_VERSION};

use super::state::is_active;
use super::{Game, Phase};

/// Checks that a snapshot describes a game the engine could have produced.
fn is_consistent(snapshot: &GameSnapshot) -> bool {
    let players = &snapshot.players;

    let mut ids: Vec<u8> = players.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != players.len() {
        return false;
    }

    if players
        .iter()
        .any(|p| (p.lives() == 0) != p.is_eliminated())
    {
        return false;
    }

    let known = |id: u8| players.iter().any(|p| p.id == id);

    if snapshot.draw_pile.cursor > snapshot.draw_pile.order.len() {
        return false;
    }

    match snapshot.phase {
        Phase::Setup => return snapshot.round.is_none(),
        Phase::GameOver => {
            if !snapshot.winner.is_some_and(known) {
                return false;
            }
        }
        Phase::RoundEnded => {
            if snapshot.next_starter.is_none_or(|seat| seat >= players.len()) {
                return false;
            }
        }
        Phase::AwaitingTurnAction
        | Phase::AwaitingChallengeDecision
        | Phase::AwaitingResolution => {
            if snapshot.current_index >= players.len() {
                return false;
            }
        }
    }

    let Some(round) = &snapshot.round else {
        return matches!(snapshot.phase, Phase::GameOver);
    };

    if round.revealed.iter().any(|&rank| rank >= round.question.len())
        || round.players.iter().any(|p| !known(p.player_id))
        || round.last_guesser.is_some_and(|id| !known(id))
    {
        return false;
    }

    let mut members: Vec<u8> = round.players.iter().map(|p| p.player_id).collect();
    members.sort_unstable();
    members.dedup();
    if members.len() != round.players.len() {
        return false;
    }

    if !matches!(
        snapshot.phase,
        Phase::AwaitingTurnAction | Phase::AwaitingChallengeDecision | Phase::AwaitingResolution
    ) {
        return true;
    }

    // Eliminated players only stay in the round once marked out of it.
    if players
        .iter()
        .any(|p| p.is_eliminated() && !round.has_passed(p.id))
    {
        return false;
    }

    let holder = &players[snapshot.current_index];
    if !is_active(holder, round) {
        return false;
    }

    match snapshot.phase {
        Phase::AwaitingTurnAction => round.current_guess.is_none(),
        Phase::AwaitingChallengeDecision => {
            round.current_guess.is_some()
                && round.guesser == Some(holder.id)
                && round.challenger.is_none()
        }
        Phase::AwaitingResolution => {
            round.current_guess.is_some()
                && round.guesser == Some(holder.id)
                && round.challenger.is_some_and(|id| {
                    id != holder.id && players.iter().any(|p| p.id == id && is_active(p, round))
                })
        }
        _ => true,
    }
}

impl Game {
    /// Captures the full game state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            version: SNAPSHOT_VERSION,
            options: self.options.clone(),
            phase: self.phase(),
            players: self.players.cloned(),
            current_index: *self.current_index.lock(),
            round_number: *self.round_number.lock(),
            draw_pile: self.draw_pile.cloned(),
            round: self.round.cloned(),
            next_starter: *self.next_starter.lock(),
            winner: *self.winner.lock(),
            rng: RngPosition::new(self.seed, self.rng.lock().get_word_pos()),
        }
    }

    /// Rebuilds a game from a snapshot.
    ///
    /// The restored game resumes with the same phase, turn holder, passed
    /// players, revealed items, and draw order. Load the deck catalog again
    /// with [`Game::set_decks`] or [`Game::load_decks`] if the host needs it
    /// for the next setup.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot was written by another format version
    /// or describes an impossible game.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        if !is_consistent(&snapshot) {
            warn!(phase = ?snapshot.phase, "Rejected inconsistent snapshot");
            return Err(SnapshotError::Inconsistent);
        }

        let game = Self::new(snapshot.options, snapshot.rng.seed);

        let mut rng = ChaCha8Rng::seed_from_u64(snapshot.rng.seed);
        rng.set_word_pos(snapshot.rng.word_pos());
        *game.rng.lock() = rng;

        let next_id = snapshot
            .players
            .iter()
            .map(|p| p.id.saturating_add(1))
            .max()
            .unwrap_or(0);
        game.next_id.store(next_id, Ordering::SeqCst);

        *game.players.lock() = snapshot.players;
        *game.current_index.lock() = snapshot.current_index;
        *game.round_number.lock() = snapshot.round_number;
        *game.draw_pile.lock() = snapshot.draw_pile;
        *game.round.lock() = snapshot.round;
        *game.next_starter.lock() = snapshot.next_starter;
        *game.winner.lock() = snapshot.winner;
        *game.phase.lock() = snapshot.phase;

        info!(
            phase = ?snapshot.phase,
            round = snapshot.round_number,
            "Game restored from snapshot"
        );
        Ok(game)
    }
}
