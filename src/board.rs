//! Board representation and state encoding for the 8-puzzle.
//!
//! A board is a permutation of the digits 0-8 laid out row-major on a 3x3
//! grid, with 0 standing for the blank. Every board also has a compact
//! integer form: the nine digits concatenated in row-major order, so
//! `[1,2,3,4,5,6,7,8,0]` becomes `123456780`. Boards whose top-left tile is
//! the blank lose their leading zero in integer form, which decoding has to
//! restore.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseBoardError;

/// Grid side length. The puzzle is fixed at 3x3.
pub const SIDE: usize = 3;

/// Total number of tiles, blank included.
pub const TILES: usize = SIDE * SIDE;

/// Compact integer form of a board: nine decimal digits, row-major.
///
/// The largest valid state is `876543210`, which fits a `u32`.
pub type StateId = u32;

/// A 3x3 tile arrangement.
///
/// The codec does no permutation validation; callers that accept untrusted
/// input go through [`Board::from_str`] instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    tiles: [u8; TILES],
}

impl Board {
    /// The fixed goal configuration: blank in the bottom-right corner.
    pub const GOAL: Board = Board {
        tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
    };

    /// Wraps a row-major tile arrangement without validating it.
    pub const fn new(tiles: [u8; TILES]) -> Self {
        Board { tiles }
    }

    /// Decodes a state id back into a board.
    ///
    /// Digits are peeled off least-significant-first into the tail of a
    /// zeroed array, so any leading zeros the decimal form dropped are
    /// restored by the untouched slots.
    pub fn from_id(mut id: StateId) -> Self {
        let mut tiles = [0u8; TILES];
        let mut slot = TILES;
        while id > 0 {
            slot -= 1;
            tiles[slot] = (id % 10) as u8;
            id /= 10;
        }
        Board { tiles }
    }

    /// Encodes the board as its compact integer form.
    pub fn id(&self) -> StateId {
        self.tiles
            .iter()
            .fold(0, |id, &tile| id * 10 + StateId::from(tile))
    }

    /// Row-major tile values.
    pub fn tiles(&self) -> &[u8; TILES] {
        &self.tiles
    }

    /// Returns the tile at (row, col).
    pub fn tile(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * SIDE + col]
    }

    /// Locates a tile value, returning its (row, col).
    ///
    /// Panics if the value is not on the board, which cannot happen for a
    /// valid permutation and a tile in 0..9.
    pub fn position_of(&self, tile: u8) -> (usize, usize) {
        let slot = self
            .tiles
            .iter()
            .position(|&t| t == tile)
            .expect("tile not on board");
        (slot / SIDE, slot % SIDE)
    }

    /// Locates the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        self.position_of(0)
    }

    /// Swaps the tiles at two (row, col) positions.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        self.tiles.swap(a.0 * SIDE + a.1, b.0 * SIDE + b.1);
    }

    /// Counts out-of-order pairs with the blank removed.
    ///
    /// Only the parity of this count matters: one legal blank move never
    /// changes it, so a state is reachable from the goal exactly when the
    /// two inversion counts share a parity.
    pub fn inversions(&self) -> usize {
        let tiles: Vec<u8> = self.tiles.iter().copied().filter(|&t| t != 0).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| tiles[i + 1..].iter().filter(|&&later| later < tile).count())
            .sum()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine digits 0-8, optionally separated by commas or whitespace,
    /// and validates that they form a permutation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = [0u8; TILES];
        let mut count = 0;

        for ch in s.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
            // radix 9 accepts exactly the digits 0-8
            let tile = ch.to_digit(9).ok_or(ParseBoardError::BadTile(ch))? as u8;
            if count == TILES {
                return Err(ParseBoardError::WrongLength(count + 1));
            }
            tiles[count] = tile;
            count += 1;
        }
        if count < TILES {
            return Err(ParseBoardError::WrongLength(count));
        }

        let mut seen = [false; TILES];
        for &tile in &tiles {
            if seen[tile as usize] {
                return Err(ParseBoardError::DuplicateTile(tile));
            }
            seen[tile as usize] = true;
        }

        Ok(Board { tiles })
    }
}

impl fmt::Display for Board {
    /// Renders the grid row by row, with '.' for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIDE {
            for col in 0..SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.tile(row, col) {
                    0 => write!(f, ".")?,
                    tile => write!(f, "{}", tile)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_encodes_to_known_id() {
        assert_eq!(Board::GOAL.id(), 123456780);
    }

    #[test]
    fn test_roundtrip_through_id() {
        let board = Board::new([2, 8, 3, 1, 6, 4, 7, 5, 0]);
        assert_eq!(Board::from_id(board.id()), board);
    }

    #[test]
    fn test_decode_restores_leading_blank() {
        // [0,1,2,...,8] encodes to the 8-digit integer 12345678; decoding
        // must pad the dropped leading zero back in.
        let board = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(board.id(), 12_345_678);
        assert_eq!(Board::from_id(12_345_678), board);
    }

    #[test]
    fn test_decode_pads_every_missing_digit() {
        // Not a reachable state, but the decoder pads to the full width
        // rather than restoring a single zero.
        let board = Board::from_id(12);
        assert_eq!(board.tiles(), &[0, 0, 0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_goal_has_zero_inversions() {
        assert_eq!(Board::GOAL.inversions(), 0);
    }

    #[test]
    fn test_inversions_skip_the_blank() {
        // With the blank removed: [2,8,3,1,6,4,7,5] has pairs
        // (2,1) (8,3) (8,1) (8,6) (8,4) (8,7) (8,5) (3,1) (6,4) (6,5) (7,5).
        let board = Board::new([2, 8, 3, 1, 6, 4, 7, 5, 0]);
        assert_eq!(board.inversions(), 11);
    }

    #[test]
    fn test_blank_position() {
        assert_eq!(Board::GOAL.blank_position(), (2, 2));
        assert_eq!(Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).blank_position(), (0, 0));
    }

    #[test]
    fn test_parse_comma_separated() {
        let board: Board = "1,0,2,3,4,5,6,7,8".parse().unwrap();
        assert_eq!(board, Board::new([1, 0, 2, 3, 4, 5, 6, 7, 8]));
    }

    #[test]
    fn test_parse_compact() {
        let board: Board = "123456780".parse().unwrap();
        assert_eq!(board, Board::GOAL);
    }

    #[test]
    fn test_parse_rejects_nine() {
        assert!(matches!(
            "123456789".parse::<Board>(),
            Err(ParseBoardError::BadTile('9'))
        ));
    }

    #[test]
    fn test_parse_rejects_duplicates() {
        assert!(matches!(
            "112345678".parse::<Board>(),
            Err(ParseBoardError::DuplicateTile(1))
        ));
    }

    #[test]
    fn test_parse_rejects_short_input() {
        assert!(matches!(
            "1,2,3".parse::<Board>(),
            Err(ParseBoardError::WrongLength(3))
        ));
    }

    #[test]
    fn test_display_marks_blank() {
        assert_eq!(Board::GOAL.to_string(), "1 2 3\n4 5 6\n7 8 .\n");
    }
}
