//! N×N occupancy grid.
//!
//! ```text
//! Cells are stored row-major:
//!   (0,0)=0      (0,1)=1      ...  (0,N-1)=N-1
//!   (1,0)=N      (1,1)=N+1    ...
//!   ...
//!   (N-1,0)=N(N-1)          ...  (N-1,N-1)=N²-1
//! ```
//!
//! The board does not validate positions; callers hand it cells produced by
//! [`Pos::checked`].

use crate::{Player, Pos};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create an empty board of side `size`.
    pub fn new(size: usize) -> Board {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Who occupies a cell, `None` if it is empty.
    #[inline]
    pub fn occupant(&self, pos: Pos) -> Option<Player> {
        self.cells[self.index(pos)]
    }

    /// Check if a cell is empty.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.occupant(pos).is_none()
    }

    /// Mark a cell as held by `player`.
    #[inline]
    pub fn place(&mut self, pos: Pos, player: Player) {
        let idx = self.index(pos);
        self.cells[idx] = Some(player);
    }

    /// Empty a cell.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = None;
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    // ========== Win Detection ==========

    /// All 2N + 2 lines: N rows, N columns, main diagonal, anti-diagonal.
    pub fn lines(&self) -> impl Iterator<Item = Vec<Pos>> + '_ {
        let n = self.size;
        let rows = (0..n).map(move |r| (0..n).map(|c| Pos::new(r, c)).collect::<Vec<_>>());
        let cols = (0..n).map(move |c| (0..n).map(|r| Pos::new(r, c)).collect::<Vec<_>>());
        let main = std::iter::once((0..n).map(|i| Pos::new(i, i)).collect::<Vec<_>>());
        let anti = std::iter::once((0..n).map(|i| Pos::new(i, n - 1 - i)).collect::<Vec<_>>());
        rows.chain(cols).chain(main).chain(anti)
    }

    /// Check if `player` holds every cell of some line.
    pub fn has_won(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Get the first line fully held by `player`, if any.
    pub fn winning_line(&self, player: Player) -> Option<Vec<Pos>> {
        self.lines()
            .find(|line| line.iter().all(|&pos| self.occupant(pos) == Some(player)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: Player = Player(0);
    const P1: Player = Player(1);

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.place(Pos::new(r, c), P0),
                    'O' => board.place(Pos::new(r, c), P1),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_board_new_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.size(), 3);
        for pos in Pos::all(3) {
            assert!(board.is_empty(pos));
            assert_eq!(board.occupant(pos), None);
        }
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new(3);
        board.place(Pos::new(1, 2), P1);
        assert_eq!(board.occupant(Pos::new(1, 2)), Some(P1));

        // Other cells untouched
        assert!(board.is_empty(Pos::new(2, 1)));
        assert!(board.is_empty(Pos::new(0, 0)));

        board.clear(Pos::new(1, 2));
        assert!(board.is_empty(Pos::new(1, 2)));
    }

    #[test]
    fn test_count() {
        let board = board_from(&["XO.", ".X.", "..O"]);
        assert_eq!(board.count(P0), 2);
        assert_eq!(board.count(P1), 2);
    }

    #[test]
    fn test_lines_count_and_shape() {
        for n in 1..=5 {
            let board = Board::new(n);
            let lines: Vec<_> = board.lines().collect();
            assert_eq!(lines.len(), 2 * n + 2);
            assert!(lines.iter().all(|l| l.len() == n));
        }
    }

    #[test]
    fn test_lines_3x3_order() {
        let board = Board::new(3);
        let lines: Vec<_> = board.lines().collect();
        assert_eq!(lines[0], vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
        assert_eq!(lines[3], vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0)]);
        assert_eq!(lines[6], vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]);
        assert_eq!(lines[7], vec![Pos::new(0, 2), Pos::new(1, 1), Pos::new(2, 0)]);
    }

    #[test]
    fn test_has_won_row() {
        let board = board_from(&["XXX", "OO.", "..."]);
        assert!(board.has_won(P0));
        assert!(!board.has_won(P1));
    }

    #[test]
    fn test_has_won_column() {
        let board = board_from(&["XO.", "XO.", ".O."]);
        assert!(board.has_won(P1));
        assert!(!board.has_won(P0));
    }

    #[test]
    fn test_has_won_diagonals() {
        assert!(board_from(&["X..", ".X.", "..X"]).has_won(P0));
        assert!(board_from(&["..O", ".O.", "O.."]).has_won(P1));
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let board = Board::new(3);
        assert!(!board.has_won(P0));
        assert!(!board.has_won(P1));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&["XXO", "OOX", "XXO"]);
        assert!(!board.has_won(P0));
        assert!(!board.has_won(P1));
    }

    #[test]
    fn test_winning_line_returns_first_match() {
        // Row 0 and column 0 both complete; the row is scanned first.
        let board = board_from(&["XXX", "X..", "X.."]);
        assert_eq!(
            board.winning_line(P0),
            Some(vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)])
        );
        assert_eq!(board.winning_line(P1), None);
    }

    #[test]
    fn test_larger_board_needs_full_line() {
        let board = board_from(&["XXX.", "....", "....", "...."]);
        assert!(!board.has_won(P0));
        let board = board_from(&["XXXX", "....", "....", "...."]);
        assert!(board.has_won(P0));
    }

    #[test]
    fn test_single_cell_board() {
        let mut board = Board::new(1);
        assert!(!board.has_won(P0));
        board.place(Pos::new(0, 0), P0);
        assert!(board.has_won(P0));
    }
}
