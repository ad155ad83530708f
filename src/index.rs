//! Precomputed rank index over the full 8-puzzle state space.
//!
//! All 9! = 362,880 permutations of the digits 0-8 are enumerated once, in
//! lexicographic order, and stored as state ids. Lexicographic digit order
//! happens to be ascending id order, so a binary search gives every state a
//! stable rank in O(log n). Searches use that rank to address their
//! per-state parent/metric/visited arrays instead of hashing.

use crate::board::{Board, StateId, TILES};

const fn factorial(n: usize) -> usize {
    let mut product = 1;
    let mut k = n;
    while k > 1 {
        product *= k;
        k -= 1;
    }
    product
}

/// Number of permutations of nine tiles, and the size of every per-search
/// metadata array.
pub const PERMUTATIONS: usize = factorial(TILES);

/// Immutable, sorted table of every reachable-or-not permutation id.
///
/// Built once at startup and shared by reference across searches; only the
/// per-search metadata keyed by [`StateIndex::rank`] is ever mutated.
pub struct StateIndex {
    table: Vec<StateId>,
}

impl StateIndex {
    /// Enumerates the full permutation space.
    pub fn build() -> Self {
        let mut table = Vec::with_capacity(PERMUTATIONS);
        let mut used = [false; TILES];
        let mut tiles = [0u8; TILES];
        enumerate(&mut used, &mut tiles, 0, &mut table);

        debug_assert_eq!(table.len(), PERMUTATIONS);
        StateIndex { table }
    }

    /// Binary-searches a state id, returning its rank.
    ///
    /// `None` is unreachable for valid permutations; the search layer treats
    /// it as a fatal consistency failure.
    pub fn rank(&self, id: StateId) -> Option<usize> {
        self.table.binary_search(&id).ok()
    }

    /// Number of indexed states.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Recursive lexicographic permutation enumeration: at each depth, place the
/// smallest unused digit first, so ids are pushed in ascending order.
fn enumerate(
    used: &mut [bool; TILES],
    tiles: &mut [u8; TILES],
    depth: usize,
    table: &mut Vec<StateId>,
) {
    if depth == TILES {
        table.push(Board::new(*tiles).id());
        return;
    }
    for digit in 0..TILES as u8 {
        if used[digit as usize] {
            continue;
        }
        used[digit as usize] = true;
        tiles[depth] = digit;
        enumerate(used, tiles, depth + 1, table);
        used[digit as usize] = false;
    }
}
