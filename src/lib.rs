//! 8-Puzzle Solver Library
//!
//! Solves the 3x3 sliding tile puzzle from an arbitrary start toward the
//! fixed goal (tiles 1-8 in order, blank bottom-right). A permutation-parity
//! gate rejects the unreachable half of the state space up front; solvable
//! states are handed to one of three interchangeable search strategies that
//! share their bookkeeping and path reconstruction.

pub mod board;
pub mod error;
pub mod fringe;
pub mod index;
pub mod search;

use board::Board;
use error::SearchError;
use index::StateIndex;
use search::SearchReport;

/// Search strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Breadth-first: complete, returns a shortest path.
    Bfs,
    /// Depth-first bounded at [`search::DFS_MAX_DEPTH`] moves: fast to
    /// commit, paths can be long, and solutions past the bound are missed.
    Dfs,
    /// Uniform-cost ordered by tile displacement from the initial state.
    Ucs,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Bfs => "BFS",
            Strategy::Dfs => "DFS",
            Strategy::Ucs => "UCS",
        })
    }
}

/// One puzzle instance: an initial arrangement to solve toward
/// [`Board::GOAL`].
pub struct Puzzle {
    initial: Board,
}

impl Puzzle {
    pub fn new(initial: Board) -> Self {
        Puzzle { initial }
    }

    pub fn initial(&self) -> Board {
        self.initial
    }

    /// Parity pre-check: a state reaches the goal iff their inversion
    /// counts share a parity, since one blank move never changes it.
    pub fn is_solvable(&self) -> bool {
        self.initial.inversions() % 2 == Board::GOAL.inversions() % 2
    }

    /// Runs the chosen strategy, gated on solvability.
    ///
    /// An opposite-parity start returns `path: None` without expanding a
    /// single node. Errors only on internal index inconsistencies.
    pub fn solution(
        &self,
        strategy: Strategy,
        index: &StateIndex,
    ) -> Result<SearchReport, SearchError> {
        if !self.is_solvable() {
            return Ok(SearchReport::unsolvable());
        }
        match strategy {
            Strategy::Bfs => search::bfs(index, self.initial),
            Strategy::Dfs => search::dfs(index, self.initial),
            Strategy::Ucs => search::ucs(index, self.initial),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_is_solvable() {
        assert!(Puzzle::new(Board::GOAL).is_solvable());
    }

    #[test]
    fn test_parity_flips_on_illegal_transposition() {
        // swapping two numbered tiles in place is not a legal move and
        // lands in the opposite parity class
        assert!(!Puzzle::new(Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0])).is_solvable());
    }

    #[test]
    fn test_unsolvable_state_expands_nothing() {
        let index = StateIndex::build();
        let puzzle = Puzzle::new(Board::new([2, 1, 3, 4, 5, 6, 7, 8, 0]));
        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs] {
            let report = puzzle.solution(strategy, &index).unwrap();
            assert!(report.path.is_none());
            assert_eq!(report.expanded, 0, "{strategy} must not expand any node");
        }
    }

    #[test]
    fn test_every_strategy_solves_a_near_goal_state() {
        let index = StateIndex::build();
        let puzzle = Puzzle::new(Board::new([1, 2, 3, 4, 5, 6, 7, 0, 8]));
        assert!(puzzle.is_solvable());

        for strategy in [Strategy::Bfs, Strategy::Dfs, Strategy::Ucs] {
            let report = puzzle.solution(strategy, &index).unwrap();
            let path = report
                .path
                .unwrap_or_else(|| panic!("{strategy} found no path"));
            assert_eq!(path.last(), Some(&Board::GOAL));
        }
    }

    #[test]
    fn test_one_legal_move_preserves_solvability() {
        for id in fringe::successors(Board::GOAL.id()) {
            assert!(Puzzle::new(Board::from_id(id)).is_solvable());
        }
    }
}
