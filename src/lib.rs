//! A Top 10 party-trivia game engine with optional `no_std` support.
//!
//! Players take turns guessing items of a ranked Top 10 list. Every guess can
//! be accepted by the table or challenged by another player; a challenge costs
//! whoever was wrong a life, and a challenger who catches a wrong guess wins
//! the card for the round. The [`Game`] type owns the whole flow: setup,
//! turn rotation, challenge resolution, round-end detection, and standings.
//!
//! # Example
//!
//! ```
//! use topten::{Game, GameOptions, Phase, parse_decks};
//!
//! let json = r#"{"decks":[{"theme":"Geography","questions":[{"category":"Largest cities",
//!     "top10":["Tokyo","Delhi","Shanghai","São Paulo","Mexico City",
//!              "Cairo","Mumbai","Beijing","Dhaka","Osaka"]}]}]}"#;
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.set_decks(parse_decks(json).unwrap());
//! game.start_game(&["Ana", "Bruno"], 0).unwrap();
//! assert_eq!(game.phase(), Phase::AwaitingTurnAction);
//!
//! let ana = game.current_player().unwrap();
//! game.guess(ana, "sao paulo").unwrap();
//! let outcome = game.accept().unwrap();
//! assert!(outcome.correct);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod deck;
pub mod error;
pub mod game;
pub mod normalize;
pub mod observer;
pub mod options;
pub mod player;
pub mod question;
pub mod result;
pub mod snapshot;
mod sync;
pub mod timer;

// Re-export main types
#[cfg(feature = "std")]
pub use deck::FileDeckSource;
pub use deck::{DeckSource, DrawPile, JsonDeckSource, draw_order, parse_decks};
pub use error::{ActionError, ChallengeError, LoadError, SetupError, SnapshotError};
pub use game::{Game, Phase, RoundPlayerState, RoundState};
pub use normalize::normalize_answer;
pub use observer::{Feedback, GameObserver};
pub use options::{AcceptRule, GameMode, GameOptions};
pub use player::Player;
pub use question::{Deck, Question, TOP_SIZE};
pub use result::{
    AcceptOutcome, ChallengeResolution, RoundEnd, RoundEndReason, Standing, TurnOutcome,
};
#[cfg(feature = "std")]
pub use snapshot::JsonFileStore;
pub use snapshot::{GameSnapshot, MemoryStore, SNAPSHOT_VERSION, SnapshotStore};
pub use timer::{TimerKind, Timers};
