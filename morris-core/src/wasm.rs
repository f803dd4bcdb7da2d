//! WASM bindings for morris-core
//!
//! Provides a JavaScript-friendly API for the engine.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::{Engine, EngineConfig, Stone};

/// Occupant value reported for an empty cell.
pub const NO_PLAYER: i32 = -1;

/// WASM-friendly wrapper around Engine
#[wasm_bindgen]
pub struct WasmEngine {
    inner: Engine,
}

#[wasm_bindgen]
impl WasmEngine {
    /// Create an engine for `player_count` players on a board of side `board_size`
    #[wasm_bindgen(constructor)]
    pub fn new(
        board_size: usize,
        stones_per_player: usize,
        player_count: u8,
    ) -> Result<WasmEngine, JsValue> {
        let config = EngineConfig::default()
            .with_board_size(board_size)
            .with_stones_per_player(stones_per_player)
            .with_player_count(player_count);
        Engine::new(config)
            .map(|inner| WasmEngine { inner })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select the current player's stone at (row, col)
    pub fn select(&mut self, row: i32, col: i32) -> bool {
        self.inner.select(row, col)
    }

    /// Move the selected stone. Returns { still_selected, current_player, game_ended }
    #[wasm_bindgen(js_name = moveStone)]
    pub fn move_stone(&mut self, row: i32, col: i32) -> Result<JsValue, JsValue> {
        let outcome = self.inner.move_stone(row, col);
        to_js(&outcome)
    }

    /// Stones on the board as [{ x, y, owner }, ...]
    #[wasm_bindgen(js_name = placedStones)]
    pub fn placed_stones(&self) -> Result<JsValue, JsValue> {
        let stones: Vec<WasmStone> = self.inner.placed_stones().map(WasmStone::from).collect();
        to_js(&stones)
    }

    /// Current player (0-based)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player().0
    }

    /// Check if the game has been won
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_over()
    }

    /// Get winning line as array of positions [row, col, row, col, ...]
    /// Returns empty array if no winner
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u32> {
        self.inner
            .winning_line()
            .map(|line| {
                line.iter()
                    .flat_map(|pos| [pos.row as u32, pos.col as u32])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Owner of a cell, or NO_PLAYER (-1) if empty or off the board
    pub fn occupant(&self, row: i32, col: i32) -> i32 {
        self.inner
            .occupant(row, col)
            .map_or(NO_PLAYER, |p| i32::from(p.0))
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Serializable stone for JavaScript
#[derive(Serialize)]
struct WasmStone {
    x: i64,
    y: i64,
    owner: u8,
}

impl From<&Stone> for WasmStone {
    fn from(stone: &Stone) -> Self {
        WasmStone {
            x: stone.x(),
            y: stone.y(),
            owner: stone.owner.0,
        }
    }
}
