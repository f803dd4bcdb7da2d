//! Per-player stones.
//!
//! Every stone lives in one arena slot for the whole game; only its
//! position changes. Stones are laid out player-major in creation order:
//!
//! ```text
//! slot:   0 .. k-1      k .. 2k-1     ...
//! owner:  Player(0)     Player(1)     ...
//! ```
//!
//! Unplaced stones of one player are indistinguishable by value, so the
//! engine addresses stones by [`StoneId`] rather than by content.

use serde::{Deserialize, Serialize};

use crate::{Player, Pos};

/// Arena slot of a stone.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct StoneId(pub usize);

/// A player-owned stone, either in reserve (`pos == None`) or on a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub owner: Player,
    pub pos: Option<Pos>,
}

impl Stone {
    /// A stone still in its owner's reserve.
    #[inline]
    pub const fn unplaced(owner: Player) -> Stone {
        Stone { owner, pos: None }
    }

    #[inline]
    pub fn is_placed(&self) -> bool {
        self.pos.is_some()
    }

    /// Row of the occupied cell, or -1 while unplaced.
    pub fn x(&self) -> i64 {
        self.pos.map_or(-1, |p| p.row as i64)
    }

    /// Column of the occupied cell, or -1 while unplaced.
    pub fn y(&self) -> i64 {
        self.pos.map_or(-1, |p| p.col as i64)
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Inventory {
    stones: Vec<Stone>,
}

impl Inventory {
    /// Create `stones_per_player` unplaced stones for each of `player_count` players.
    pub fn new(player_count: u8, stones_per_player: usize) -> Inventory {
        let stones = Player::all(player_count)
            .flat_map(|p| std::iter::repeat(Stone::unplaced(p)).take(stones_per_player))
            .collect();
        Inventory { stones }
    }

    /// Look up a stone by slot.
    #[inline]
    pub fn get(&self, id: StoneId) -> &Stone {
        &self.stones[id.0]
    }

    /// Iterate over every stone with its slot, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (StoneId, &Stone)> + '_ {
        self.stones.iter().enumerate().map(|(i, s)| (StoneId(i), s))
    }

    /// The stone of `owner` sitting on `pos`, if any.
    pub fn find_owned_at(&self, pos: Pos, owner: Player) -> Option<StoneId> {
        self.iter()
            .find(|(_, s)| s.owner == owner && s.pos == Some(pos))
            .map(|(id, _)| id)
    }

    /// The first (by creation order) stone of `owner` still in reserve.
    pub fn find_next_unplaced(&self, owner: Player) -> Option<StoneId> {
        self.iter()
            .find(|(_, s)| s.owner == owner && !s.is_placed())
            .map(|(id, _)| id)
    }

    /// Rebind a stone to a new cell.
    #[inline]
    pub fn update_position(&mut self, id: StoneId, pos: Pos) {
        self.stones[id.0].pos = Some(pos);
    }

    /// Stones currently on the board, in creation order.
    ///
    /// Reflects live state: a fresh iterator is built on every call.
    pub fn placed_stones(&self) -> impl Iterator<Item = &Stone> + '_ {
        self.stones.iter().filter(|s| s.is_placed())
    }

    /// How many stones `owner` has not yet put on the board.
    pub fn unplaced_count(&self, owner: Player) -> usize {
        self.stones
            .iter()
            .filter(|s| s.owner == owner && !s.is_placed())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: Player = Player(0);
    const P1: Player = Player(1);

    #[test]
    fn test_inventory_new_layout() {
        let inv = Inventory::new(2, 3);
        assert_eq!(inv.iter().count(), 6);
        let owners: Vec<_> = inv.iter().map(|(_, s)| s.owner).collect();
        assert_eq!(owners, vec![P0, P0, P0, P1, P1, P1]);
        assert!(inv.iter().all(|(_, s)| !s.is_placed()));
    }

    #[test]
    fn test_unplaced_stone_reports_minus_one() {
        let stone = Stone::unplaced(P0);
        assert_eq!((stone.x(), stone.y()), (-1, -1));

        let placed = Stone { owner: P0, pos: Some(Pos::new(2, 1)) };
        assert_eq!((placed.x(), placed.y()), (2, 1));
    }

    #[test]
    fn test_find_next_unplaced_is_stable() {
        let mut inv = Inventory::new(2, 3);
        assert_eq!(inv.find_next_unplaced(P0), Some(StoneId(0)));
        assert_eq!(inv.find_next_unplaced(P1), Some(StoneId(3)));

        inv.update_position(StoneId(0), Pos::new(0, 0));
        assert_eq!(inv.find_next_unplaced(P0), Some(StoneId(1)));
        // Asking twice gives the same answer
        assert_eq!(inv.find_next_unplaced(P0), Some(StoneId(1)));
    }

    #[test]
    fn test_find_next_unplaced_exhausted() {
        let mut inv = Inventory::new(2, 2);
        inv.update_position(StoneId(0), Pos::new(0, 0));
        inv.update_position(StoneId(1), Pos::new(0, 1));
        assert_eq!(inv.find_next_unplaced(P0), None);
        assert_eq!(inv.find_next_unplaced(P1), Some(StoneId(2)));
    }

    #[test]
    fn test_find_owned_at() {
        let mut inv = Inventory::new(2, 2);
        inv.update_position(StoneId(1), Pos::new(1, 1));
        inv.update_position(StoneId(2), Pos::new(2, 2));

        assert_eq!(inv.find_owned_at(Pos::new(1, 1), P0), Some(StoneId(1)));
        assert_eq!(inv.find_owned_at(Pos::new(2, 2), P1), Some(StoneId(2)));

        // Wrong owner or empty cell
        assert_eq!(inv.find_owned_at(Pos::new(1, 1), P1), None);
        assert_eq!(inv.find_owned_at(Pos::new(0, 0), P0), None);
    }

    #[test]
    fn test_update_position_targets_one_slot() {
        // All unplaced stones of P0 compare equal; only slot 1 must move.
        let mut inv = Inventory::new(1, 3);
        assert_eq!(inv.get(StoneId(0)), inv.get(StoneId(1)));

        inv.update_position(StoneId(1), Pos::new(0, 2));
        assert!(!inv.get(StoneId(0)).is_placed());
        assert_eq!(inv.get(StoneId(1)).pos, Some(Pos::new(0, 2)));
        assert!(!inv.get(StoneId(2)).is_placed());
    }

    #[test]
    fn test_placed_stones_is_live_and_ordered() {
        let mut inv = Inventory::new(2, 2);
        assert_eq!(inv.placed_stones().count(), 0);

        inv.update_position(StoneId(3), Pos::new(2, 0));
        inv.update_position(StoneId(0), Pos::new(0, 0));

        let placed: Vec<_> = inv.placed_stones().copied().collect();
        assert_eq!(
            placed,
            vec![
                Stone { owner: P0, pos: Some(Pos::new(0, 0)) },
                Stone { owner: P1, pos: Some(Pos::new(2, 0)) },
            ]
        );

        // A second call sees later updates
        inv.update_position(StoneId(0), Pos::new(1, 1));
        let first = inv.placed_stones().next().copied();
        assert_eq!(first, Some(Stone { owner: P0, pos: Some(Pos::new(1, 1)) }));
    }

    #[test]
    fn test_counts() {
        let mut inv = Inventory::new(2, 4);
        assert_eq!(inv.unplaced_count(P0), 4);

        inv.update_position(StoneId(0), Pos::new(0, 0));
        inv.update_position(StoneId(1), Pos::new(0, 1));
        assert_eq!(inv.unplaced_count(P0), 2);
        assert_eq!(inv.placed_stones().count(), 2);
        assert_eq!(inv.unplaced_count(P1), 4);
    }
}
