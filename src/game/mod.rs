//! Game engine and state management.

use core::sync::atomic::{AtomicU8, Ordering};

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::sync::Mutex;

use crate::deck::{DeckSource, DrawPile};
use crate::error::{LoadError, SetupError};
use crate::normalize::normalize_answer;
use crate::observer::{Feedback, GameObserver};
use crate::options::{GameOptions, MIN_PLAYERS};
use crate::player::Player;
use crate::question::Deck;

mod actions;
mod persist;
mod resolution;
mod round;
mod standings;
pub mod state;

pub use state::{Phase, RoundPlayerState, RoundState};

/// A Top 10 game engine that manages players, rounds, and challenges.
///
/// The game owns the loaded deck catalog, the question draw pile, the player
/// registry, and the state of the round in play. Use [`GameOptions`] to
/// configure lives, the winning card count, and rule variants.
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Decks available for selection.
    pub decks: Mutex<Vec<Deck>>,
    /// Questions of the selected deck in draw order.
    pub draw_pile: Mutex<DrawPile>,
    /// Current phase.
    pub phase: Mutex<Phase>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Players in seat order.
    pub players: Mutex<Vec<Player>>,
    /// Seat index of the player whose turn it is.
    current_index: Mutex<usize>,
    /// 1-based number of the round being played (or about to be dealt).
    round_number: Mutex<u32>,
    /// State of the round in play.
    pub round: Mutex<Option<RoundState>>,
    /// Seat index that opens the next round.
    next_starter: Mutex<Option<usize>>,
    /// The winner, once the game is over.
    winner: Mutex<Option<u8>>,
    /// Seed the random number generator was created from.
    seed: u64,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
    /// Render and feedback hooks.
    observer: Mutex<Option<Box<dyn GameObserver + Send>>>,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use topten::{Game, GameOptions, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), Phase::Setup);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self {
            options,
            decks: Mutex::new(Vec::new()),
            draw_pile: Mutex::new(DrawPile::default()),
            phase: Mutex::new(Phase::Setup),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            current_index: Mutex::new(0),
            round_number: Mutex::new(1),
            round: Mutex::new(None),
            next_starter: Mutex::new(None),
            winner: Mutex::new(None),
            seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            observer: Mutex::new(None),
        }
    }

    /// Installs the render and feedback hooks, replacing any previous ones.
    pub fn set_observer<O: GameObserver + Send + 'static>(&self, observer: O) {
        *self.observer.lock() = Some(Box::new(observer));
    }

    /// Removes the render and feedback hooks.
    pub fn clear_observer(&self) {
        *self.observer.lock() = None;
    }

    /// Replaces the deck catalog.
    pub fn set_decks(&self, decks: Vec<Deck>) {
        *self.decks.lock() = decks;
    }

    /// Loads the deck catalog from a data source.
    ///
    /// Returns the number of decks loaded. On failure the previous catalog is
    /// kept and no game can start until loading succeeds.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the data is unreachable or malformed.
    pub fn load_decks<S: DeckSource + ?Sized>(&self, source: &S) -> Result<usize, LoadError> {
        let decks = source.load_decks()?;
        let count = decks.len();
        self.set_decks(decks);
        info!(decks = count, "Deck catalog loaded");
        Ok(count)
    }

    /// Returns the themes of the loaded decks, in catalog order.
    pub fn deck_themes(&self) -> Vec<String> {
        self.decks.lock().iter().map(|d| d.theme.clone()).collect()
    }

    /// Seats the players, shuffles the selected deck, and deals round 1.
    ///
    /// Names are trimmed and kept in the order given; the first name takes
    /// the first turn.
    ///
    /// # Errors
    ///
    /// Returns an error if a game is already running, the options are
    /// unplayable, the player list is too short or too long, a name is empty
    /// or repeated, or the deck cannot be used.
    pub fn start_game<S: AsRef<str>>(
        &self,
        names: &[S],
        deck_index: usize,
    ) -> Result<(), SetupError> {
        if *self.phase.lock() != Phase::Setup {
            return Err(SetupError::InvalidState);
        }

        if self.options.starting_lives == 0
            || self.options.winning_cards == 0
            || (self.options.max_players as usize) < MIN_PLAYERS
        {
            return Err(SetupError::InvalidOptions);
        }

        if names.len() < MIN_PLAYERS {
            return Err(SetupError::TooFewPlayers);
        }
        if names.len() > self.options.max_players as usize {
            return Err(SetupError::TooManyPlayers {
                max: self.options.max_players,
            });
        }

        let mut seen: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let key = normalize_answer(name.as_ref());
            if key.is_empty() {
                return Err(SetupError::EmptyName);
            }
            if seen.contains(&key) {
                return Err(SetupError::DuplicateName);
            }
            seen.push(key);
        }

        let deck = {
            let decks = self.decks.lock();
            if decks.is_empty() {
                return Err(SetupError::NoDecks);
            }
            let deck = decks.get(deck_index).ok_or(SetupError::DeckNotFound)?;
            if deck.questions.is_empty() {
                return Err(SetupError::EmptyDeck);
            }
            deck.clone()
        };

        let theme = deck.theme.clone();
        *self.draw_pile.lock() = DrawPile::new(deck, &mut *self.rng.lock());

        self.next_id.store(0, Ordering::SeqCst);
        let lives = self.options.starting_lives;
        let players: Vec<Player> = names
            .iter()
            .map(|name| {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                Player::new(id, name.as_ref().trim(), lives)
            })
            .collect();
        let player_count = players.len();
        *self.players.lock() = players;

        *self.round_number.lock() = 1;
        *self.winner.lock() = None;
        *self.next_starter.lock() = Some(0);
        *self.phase.lock() = Phase::RoundEnded;

        info!(players = player_count, deck = %theme, seed = self.seed, "Game started");

        self.deal_round();
        self.publish();
        Ok(())
    }

    /// Clears players and round state and returns to setup.
    ///
    /// The loaded deck catalog is kept.
    pub fn reset_game(&self) {
        self.players.lock().clear();
        self.next_id.store(0, Ordering::SeqCst);
        self.draw_pile.lock().clear();
        *self.round.lock() = None;
        *self.current_index.lock() = 0;
        *self.round_number.lock() = 1;
        *self.next_starter.lock() = None;
        *self.winner.lock() = None;
        *self.phase.lock() = Phase::Setup;

        info!("Game reset");
        self.publish();
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        *self.phase.lock()
    }

    /// Returns the number of the round in play.
    ///
    /// Once a round has ended this already names the round about to be dealt.
    pub fn round_number(&self) -> u32 {
        *self.round_number.lock()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` outside of a round.
    pub fn current_player(&self) -> Option<u8> {
        if !matches!(
            self.phase(),
            Phase::AwaitingTurnAction
                | Phase::AwaitingChallengeDecision
                | Phase::AwaitingResolution
        ) {
            return None;
        }
        let index = *self.current_index.lock();
        self.players.lock().get(index).map(|p| p.id)
    }

    /// Returns a copy of the player registry in seat order.
    pub fn players(&self) -> Vec<Player> {
        self.players.cloned()
    }

    /// Returns a copy of one player.
    pub fn get_player(&self, player_id: u8) -> Option<Player> {
        self.players
            .lock()
            .iter()
            .find(|p| p.id == player_id)
            .cloned()
    }

    /// Returns a copy of the round in play.
    pub fn round_state(&self) -> Option<RoundState> {
        self.round.cloned()
    }

    /// Returns the winner once the game is over.
    pub fn winner(&self) -> Option<u8> {
        *self.winner.lock()
    }

    /// Returns the seed the game was created with.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    fn seat_of(&self, player_id: u8) -> Option<usize> {
        self.players.lock().iter().position(|p| p.id == player_id)
    }

    fn emit(&self, feedback: Feedback) {
        if let Some(observer) = self.observer.lock().as_mut() {
            observer.on_feedback(feedback);
        }
    }

    /// Sends a fresh snapshot to the observer.
    ///
    /// Must be called with no other lock held.
    fn publish(&self) {
        if self.observer.lock().is_none() {
            return;
        }
        let snapshot = self.snapshot();
        if let Some(observer) = self.observer.lock().as_mut() {
            observer.on_state_changed(&snapshot);
        }
    }
}
