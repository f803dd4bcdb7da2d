//! Rule engine for placement-then-sliding alignment games.
//!
//! Two (or more) players share an N×N grid. Each player owns a fixed quota
//! of stones. While any stone is still in reserve, a turn places one; once
//! every stone is on the board, a turn slides one of the mover's stones to
//! any empty cell. The first player to fill a row, column, or diagonal with
//! their own stones wins.
//!
//! # Layout
//!
//! ```text
//! Board      - N×N occupancy grid, win detection       (board.rs)
//! Inventory  - per-player stones addressed by slot     (inventory.rs)
//! Engine     - selection protocol, turns, game result  (engine.rs)
//! Config     - construction-time options and errors    (config.rs)
//! ```
//!
//! Cell coordinates are `(row, col)`, row-major, zero-based. The engine
//! entry points take raw signed coordinates and treat anything outside
//! the board as a rejected input rather than an error.
//!
//! # Example
//!
//! ```
//! use morris_core::{Engine, EngineConfig, Player};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_stones_per_player(3)).unwrap();
//!
//! let outcome = engine.move_stone(0, 0);
//! assert!(!outcome.still_selected);
//! assert_eq!(outcome.current_player, Player::new(1));
//! assert!(!outcome.game_ended);
//! ```

mod board;
mod config;
mod engine;
mod inventory;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use config::{
    ConfigError, EngineConfig, DEFAULT_BOARD_SIZE, DEFAULT_PLAYER_COUNT,
    DEFAULT_STONES_PER_PLAYER, MAX_BOARD_SIZE, MAX_PLAYER_COUNT,
};
pub use engine::Engine;
pub use inventory::{Inventory, Stone, StoneId};

/// Player identifier, 0-based.
///
/// The first player to move is `Player(0)`. The board stores
/// `Option<Player>`, so "no player" is `None` and can never be confused
/// with a real player.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Player(pub u8);

impl Player {
    /// Create a player from its index.
    #[inline]
    pub const fn new(index: u8) -> Player {
        Player(index)
    }

    /// Get the 0-based index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who moves after this one in a game of `player_count`.
    #[inline]
    pub fn next(self, player_count: u8) -> Player {
        debug_assert!(self.0 < player_count);
        Player((self.0 + 1) % player_count)
    }

    /// Iterate over every player in a game of `player_count`.
    pub fn all(player_count: u8) -> impl Iterator<Item = Player> {
        (0..player_count).map(Player)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A cell on the board.
///
/// A `Pos` obtained from [`Pos::checked`] is always inside the board it was
/// checked against.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Create a position from row and column. Does NOT check bounds.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Pos {
        Pos { row, col }
    }

    /// Validate raw coordinates against a board of side `size`.
    ///
    /// Returns `None` for negative or out-of-range coordinates.
    #[inline]
    pub fn checked(row: i32, col: i32, size: usize) -> Option<Pos> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < size && col < size).then_some(Pos { row, col })
    }

    /// Iterate over every cell of a board of side `size`, row-major.
    pub fn all(size: usize) -> impl Iterator<Item = Pos> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Pos { row, col }))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Whether the game is still being played.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    Ended { winner: Player },
}

impl GameResult {
    /// The winner, if the game has ended.
    #[inline]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::Ended { winner } => Some(winner),
        }
    }
}

/// What a call to [`Engine::move_stone`] reports back to the driver.
///
/// `still_selected` is `true` exactly when the move was rejected: nothing
/// changed and the caller should retry with another target.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub still_selected: bool,
    pub current_player: Player,
    pub game_ended: bool,
}
