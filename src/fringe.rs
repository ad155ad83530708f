//! Successor generation: the states one legal blank move away.
//!
//! A move swaps the blank with an orthogonally adjacent tile. Directions are
//! named for where the swapped-in tile travels, so `Up` pulls the tile below
//! the blank upward (the blank itself moves down a row).

use crate::board::{Board, StateId, SIDE};

/// The four blank moves, tried in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of the tile the blank swaps with.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, 1),
            Direction::Right => (0, -1),
        }
    }
}

/// Produces the ids of every state reachable by one blank move.
///
/// Between 2 (blank in a corner) and 4 (blank in the center) successors,
/// emitted in [`Direction::ALL`] order with blocked directions skipped.
pub fn successors(id: StateId) -> Vec<StateId> {
    let board = Board::from_id(id);
    let (blank_row, blank_col) = board.blank_position();

    let mut fringe = Vec::with_capacity(Direction::ALL.len());
    for direction in Direction::ALL {
        let (row_offset, col_offset) = direction.offset();
        let row = blank_row as isize + row_offset;
        let col = blank_col as isize + col_offset;
        if !(0..SIDE as isize).contains(&row) || !(0..SIDE as isize).contains(&col) {
            continue;
        }

        let mut moved = board;
        moved.swap((blank_row, blank_col), (row as usize, col as usize));
        fringe.push(moved.id());
    }

    fringe
}

/// True when two states differ by exactly one legal blank move.
pub fn adjacent(a: StateId, b: StateId) -> bool {
    successors(a).contains(&b)
}
