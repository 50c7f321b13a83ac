//! Hooks for hosts that render the game or play feedback sounds.

use crate::snapshot::GameSnapshot;

/// One-shot feedback notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// A player challenged the pending guess.
    ChallengeRaised {
        /// The player who made the guess.
        guesser: u8,
        /// The player who challenged it.
        challenger: u8,
    },
    /// The challenged guess was on the list.
    ChallengeCorrect,
    /// The challenged guess was not on the list.
    ChallengeIncorrect,
    /// A player won the round's card.
    RoundWon {
        /// The round winner.
        player_id: u8,
    },
}

/// Receives state changes and feedback from a [`Game`](crate::Game).
///
/// Observers only ever see data; they cannot call back into the game while
/// a notification is being delivered.
pub trait GameObserver {
    /// Called after every observable mutation.
    fn on_state_changed(&mut self, snapshot: &GameSnapshot) {
        let _ = snapshot;
    }

    /// Called for fire-and-forget feedback such as sounds.
    fn on_feedback(&mut self, feedback: Feedback) {
        let _ = feedback;
    }
}
