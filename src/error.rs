//! Error types for board parsing and search.
//!
//! Note that "no solution" is never an error: parity mismatches and the DFS
//! depth cutoff both surface as an ordinary empty search result.

use crate::board::StateId;

/// Errors from parsing a board out of user input.
///
/// Only the parsing boundary validates; the codec itself trusts its callers
/// to hand it permutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    /// Input did not contain exactly nine tiles.
    #[error("expected 9 tiles, got {0}")]
    WrongLength(usize),

    /// A character that is not a digit in 0-8.
    #[error("invalid tile {0:?}, expected a digit 0-8")]
    BadTile(char),

    /// A tile value appeared more than once.
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
}

/// Internal-consistency failures during a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A state id was not found in the permutation index. The index covers
    /// the whole permutation space, so this means the codec or successor
    /// generator produced a non-permutation state.
    #[error("state {0} is missing from the permutation index")]
    UnindexedState(StateId),
}
