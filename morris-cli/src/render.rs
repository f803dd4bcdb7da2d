//! ASCII board drawing.
//!
//! ```text
//!
//! Current Board:
//! X . O
//! . X .
//! . . O
//!
//! Player X's turn.
//! ```

use morris_core::{Engine, Player, MAX_PLAYER_COUNT};

const EMPTY: char = '.';

/// Symbol for a player: X and O for the first two, then A through Z.
///
/// Distinct for every player an engine can seat, see [`MAX_PLAYER_COUNT`].
pub fn symbol(player: Player) -> char {
    match player.0 {
        0 => 'X',
        1 => 'O',
        n => char::from(b'A' + (n - 2) % 26),
    }
}

/// Draw the board from the stones on it, followed by a status line.
pub fn draw(engine: &Engine) -> String {
    let n = engine.board_size();
    let mut grid = vec![vec![EMPTY; n]; n];
    for stone in engine.placed_stones() {
        if let Some(pos) = stone.pos {
            grid[pos.row][pos.col] = symbol(stone.owner);
        }
    }

    let mut out = String::from("\nCurrent Board:\n");
    for row in &grid {
        let line: Vec<String> = row.iter().map(char::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out.push('\n');

    let player = symbol(engine.current_player());
    if engine.is_over() {
        out.push_str(&format!("Game over! Player {player} wins!\n"));
    } else {
        out.push_str(&format!("Player {player}'s turn.\n"));
    }
    out
}
