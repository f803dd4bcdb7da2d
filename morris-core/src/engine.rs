//! Selection protocol and turn sequencing.
//!
//! The engine owns the board, the stones, the current selection, whose turn
//! it is, and the game result. Drivers interact through two commands:
//!
//! - [`Engine::select`] picks one of the mover's stones already on the board.
//! - [`Engine::move_stone`] puts the selected stone on an empty cell.
//!
//! # Auto-selection
//!
//! While the mover still has stones in reserve, `move_stone` selects the
//! first of them by itself when nothing is selected, and after every
//! committed move the next mover's first reserve stone is selected. Placement
//! turns therefore need no `select` call. Once every stone is on the board
//! there is nothing left to auto-select, and each turn must start with an
//! explicit `select` of a stone to slide.
//!
//! # Terminal state
//!
//! After a win, `select` always fails and `move_stone` always rejects.

use tracing::{debug, info, instrument};

use crate::{
    Board, ConfigError, EngineConfig, GameResult, Inventory, MoveOutcome, Player, Pos, Stone,
    StoneId,
};

/// Why `move_stone` refused a target. Only used for tracing.
#[derive(Clone, Copy, Debug)]
enum Rejection {
    GameOver,
    NothingSelected,
    OutOfBounds,
    Occupied,
}

#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    board: Board,
    stones: Inventory,
    selected: Option<StoneId>,
    current: Player,
    result: GameResult,
}

impl Engine {
    /// Create an engine with an empty board, all stones in reserve, and
    /// `Player(0)` to move.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` does not describe a playable game.
    pub fn new(config: EngineConfig) -> Result<Engine, ConfigError> {
        config.validate()?;
        debug!(?config, "new engine");
        Ok(Engine::with_valid_config(config))
    }

    fn with_valid_config(config: EngineConfig) -> Engine {
        Engine {
            config,
            board: Board::new(config.board_size),
            stones: Inventory::new(config.player_count, config.stones_per_player),
            selected: None,
            current: Player(0),
            result: GameResult::Ongoing,
        }
    }

    // ========== Queries ==========

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Side length N.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// Whose turn it is. After a win this stays on the winner.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        matches!(self.result, GameResult::Ended { .. })
    }

    /// The stone waiting for a target cell, if any.
    pub fn selected(&self) -> Option<&Stone> {
        self.selected.map(|id| self.stones.get(id))
    }

    /// Who holds a cell. `None` for empty and out-of-bounds cells.
    pub fn occupant(&self, i: i32, j: i32) -> Option<Player> {
        self.checked(i, j).and_then(|pos| self.board.occupant(pos))
    }

    /// Stones on the board, in creation order.
    pub fn placed_stones(&self) -> impl Iterator<Item = &Stone> + '_ {
        self.stones.placed_stones()
    }

    /// Stones `player` still holds in reserve.
    pub fn unplaced_count(&self, player: Player) -> usize {
        self.stones.unplaced_count(player)
    }

    /// `true` while any player still has stones in reserve.
    pub fn is_placement_phase(&self) -> bool {
        self.stones.placed_stones().count() < self.config.total_stones()
    }

    /// The line that won the game, for highlighting.
    pub fn winning_line(&self) -> Option<Vec<Pos>> {
        let winner = self.result.winner()?;
        self.board.winning_line(winner)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    // ========== Commands ==========

    /// Select the mover's stone on `(i, j)`.
    ///
    /// Returns `false` and keeps any previous selection if the cell is out of
    /// bounds, empty, held by another player, or the game is over.
    #[instrument(skip(self), fields(player = self.current.0))]
    pub fn select(&mut self, i: i32, j: i32) -> bool {
        if self.is_over() {
            debug!("game is over, nothing to select");
            return false;
        }
        let found = self
            .checked(i, j)
            .and_then(|pos| self.stones.find_owned_at(pos, self.current));
        match found {
            Some(id) => {
                self.selected = Some(id);
                debug!(stone = ?self.stones.get(id), "selected stone");
                true
            }
            None => {
                debug!("no stone selected");
                false
            }
        }
    }

    /// Put the selected stone on `(i, j)`.
    ///
    /// With nothing selected, the mover's next reserve stone is selected
    /// first. The move is rejected, with board, stones, and turn unchanged,
    /// if nothing could be selected, the cell is out of bounds or occupied,
    /// or the game is over. A rejection reports `still_selected: true`.
    ///
    /// A committed move clears the selection, checks the mover for a win,
    /// passes the turn if there was none, and auto-selects the next mover's
    /// first reserve stone.
    #[instrument(skip(self), fields(player = self.current.0))]
    pub fn move_stone(&mut self, i: i32, j: i32) -> MoveOutcome {
        if self.is_over() {
            return self.reject(Rejection::GameOver);
        }

        if self.selected.is_none() {
            self.auto_select();
        }
        let Some(id) = self.selected else {
            return self.reject(Rejection::NothingSelected);
        };
        let Some(to) = self.checked(i, j) else {
            return self.reject(Rejection::OutOfBounds);
        };
        if !self.board.is_empty(to) {
            return self.reject(Rejection::Occupied);
        }

        let stone = *self.stones.get(id);
        if let Some(from) = stone.pos {
            self.board.clear(from);
        }
        self.board.place(to, stone.owner);
        self.stones.update_position(id, to);
        self.selected = None;
        debug!(from = ?stone.pos, %to, "moved stone");

        if self.board.has_won(stone.owner) {
            self.result = GameResult::Ended {
                winner: stone.owner,
            };
            info!(winner = stone.owner.0, "game over");
        } else {
            self.current = self.current.next(self.config.player_count);
            self.auto_select();
        }

        MoveOutcome {
            still_selected: false,
            current_player: self.current,
            game_ended: self.is_over(),
        }
    }

    // ========== Internals ==========

    fn checked(&self, i: i32, j: i32) -> Option<Pos> {
        Pos::checked(i, j, self.board.size())
    }

    /// Select the mover's first reserve stone, if there is one.
    fn auto_select(&mut self) {
        if let Some(id) = self.stones.find_next_unplaced(self.current) {
            self.selected = Some(id);
            debug!(slot = id.0, "auto-selected stone");
        }
    }

    fn reject(&self, reason: Rejection) -> MoveOutcome {
        debug!(?reason, "invalid move");
        MoveOutcome {
            still_selected: true,
            current_player: self.current,
            game_ended: self.is_over(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::with_valid_config(EngineConfig::default())
    }
}
