//! Construction-time engine options.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Side of the board when none is configured.
pub const DEFAULT_BOARD_SIZE: usize = 3;
/// Stones each player starts with.
pub const DEFAULT_STONES_PER_PLAYER: usize = 4;
/// Number of players.
pub const DEFAULT_PLAYER_COUNT: u8 = 2;

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 256;
/// Most players a game can seat; each gets a distinct symbol (X, O, A..Z).
pub const MAX_PLAYER_COUNT: u8 = 28;

/// Engine options. Missing keys deserialize to their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side length N of the N×N board.
    pub board_size: usize,
    /// Stones each player places before sliding begins.
    pub stones_per_player: usize,
    /// Number of players taking turns.
    pub player_count: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            stones_per_player: DEFAULT_STONES_PER_PLAYER,
            player_count: DEFAULT_PLAYER_COUNT,
        }
    }
}

impl EngineConfig {
    /// Set the board side length.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Set the per-player stone quota.
    #[must_use]
    pub fn with_stones_per_player(mut self, stones_per_player: usize) -> Self {
        self.stones_per_player = stones_per_player;
        self
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, player_count: u8) -> Self {
        self.player_count = player_count;
        self
    }

    /// Total stones in play.
    pub fn total_stones(&self) -> usize {
        self.stones_per_player
            .saturating_mul(usize::from(self.player_count))
    }

    /// Check that a game with these options can be played to the sliding phase.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint, see [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::BoardTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        if self.player_count < 2 {
            return Err(ConfigError::TooFewPlayers {
                count: self.player_count,
            });
        }
        if self.player_count > MAX_PLAYER_COUNT {
            return Err(ConfigError::TooManyPlayers {
                count: self.player_count,
                max: MAX_PLAYER_COUNT,
            });
        }
        if self.stones_per_player == 0 {
            return Err(ConfigError::NoStones);
        }
        let cells = self.board_size * self.board_size;
        let stones = self.total_stones();
        if stones > cells {
            return Err(ConfigError::TooManyStones { stones, cells });
        }
        Ok(())
    }
}

/// Why an [`EngineConfig`] was refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// Board side length is zero.
    #[display("board size must be at least 1")]
    EmptyBoard,
    /// Board side beyond [`MAX_BOARD_SIZE`].
    #[display("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge {
        /// Configured side length.
        size: usize,
        /// Largest accepted side length.
        max: usize,
    },
    /// Fewer than two players.
    #[display("at least 2 players are required, got {count}")]
    TooFewPlayers {
        /// Configured player count.
        count: u8,
    },
    /// More players than [`MAX_PLAYER_COUNT`].
    #[display("at most {max} players are supported, got {count}")]
    TooManyPlayers {
        /// Configured player count.
        count: u8,
        /// Largest accepted player count.
        max: u8,
    },
    /// Players would have nothing to place.
    #[display("each player needs at least one stone")]
    NoStones,
    /// All stones together do not fit on the board.
    #[display("{stones} stones do not fit on a board of {cells} cells")]
    TooManyStones {
        /// Stones across all players.
        stones: usize,
        /// Cells on the board.
        cells: usize,
    },
}
