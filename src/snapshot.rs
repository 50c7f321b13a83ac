//! Flat, serializable snapshots of a game and the stores that keep them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::deck::DrawPile;
use crate::error::SnapshotError;
use crate::game::{Phase, RoundState};
use crate::options::GameOptions;
use crate::player::Player;

/// Format version written into every snapshot.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Position of the game's random number stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngPosition {
    /// Seed the stream was created from.
    pub seed: u64,
    /// High half of the ChaCha word position.
    pub word_pos_high: u64,
    /// Low half of the ChaCha word position.
    pub word_pos_low: u64,
}

impl RngPosition {
    /// Splits a 128-bit word position.
    #[must_use]
    pub const fn new(seed: u64, word_pos: u128) -> Self {
        Self {
            seed,
            word_pos_high: (word_pos >> 64) as u64,
            word_pos_low: word_pos as u64,
        }
    }

    /// Joins the word position back together.
    #[must_use]
    pub const fn word_pos(&self) -> u128 {
        ((self.word_pos_high as u128) << 64) | self.word_pos_low as u128
    }
}

/// Everything needed to resume a game exactly where it was left.
///
/// The deck catalog is not part of the snapshot; only the deck in play is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Format version.
    pub version: u32,
    /// Rules the game is played under.
    pub options: GameOptions,
    /// Current phase.
    pub phase: Phase,
    /// Players in seat order.
    pub players: Vec<Player>,
    /// Seat index of the player whose turn it is.
    pub current_index: usize,
    /// Round number.
    pub round_number: u32,
    /// Question draw order and cursor.
    pub draw_pile: DrawPile,
    /// The round in play.
    pub round: Option<RoundState>,
    /// Seat that opens the next round.
    pub next_starter: Option<usize>,
    /// The winner, once the game is over.
    pub winner: Option<u8>,
    /// Random number stream position.
    pub rng: RngPosition,
}

impl GameSnapshot {
    /// Serializes the snapshot to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|err| SnapshotError::Malformed(err.to_string()))
    }

    /// Parses a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or was written by another
    /// format version.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|err| SnapshotError::Malformed(err.to_string()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }
        Ok(snapshot)
    }
}

/// Somewhere to keep a single saved game.
pub trait SnapshotStore {
    /// Saves the snapshot, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError>;

    /// Loads the saved snapshot, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be read or parsed.
    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError>;

    /// Deletes the saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be removed.
    fn clear(&mut self) -> Result<(), SnapshotError>;
}

/// A store that keeps the serialized snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    json: Option<String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { json: None }
    }

    /// Returns the stored JSON.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.json.as_deref()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        self.json = Some(snapshot.to_json()?);
        Ok(())
    }

    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError> {
        self.json.as_deref().map(GameSnapshot::from_json).transpose()
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        self.json = None;
        Ok(())
    }
}

/// A store that keeps the snapshot in a JSON file.
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl JsonFileStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new<P: Into<std::path::PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(feature = "std")]
impl SnapshotStore for JsonFileStore {
    fn save(&mut self, snapshot: &GameSnapshot) -> Result<(), SnapshotError> {
        let json = snapshot.to_json()?;
        std::fs::write(&self.path, json).map_err(|err| SnapshotError::Storage(err.to_string()))
    }

    fn load(&self) -> Result<Option<GameSnapshot>, SnapshotError> {
        match std::fs::read_to_string(&self.path) {
            Ok(json) => GameSnapshot::from_json(&json).map(Some),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SnapshotError::Storage(err.to_string())),
        }
    }

    fn clear(&mut self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SnapshotError::Storage(err.to_string())),
        }
    }
}
