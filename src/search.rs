//! Graph search over the puzzle state space.
//!
//! BFS, depth-bounded DFS, and uniform-cost search all run the same loop and
//! differ only in their frontier discipline (FIFO, LIFO, min-cost heap) and
//! an optional depth cutoff. Per-state bookkeeping lives in three arrays
//! sized to the whole 9! space and addressed by permutation rank: the parent
//! id for path reconstruction (`None` marks the search root), the step count
//! from the initial state, and a visited flag.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::board::{Board, StateId, TILES};
use crate::error::SearchError;
use crate::fringe::successors;
use crate::index::StateIndex;

/// Depth cutoff for DFS.
///
/// Moves are reversible, so an unbounded LIFO search can wander arbitrarily
/// deep; states past this bound are silently dropped. The cutoff makes DFS
/// incomplete: a solvable state whose only paths are longer than this is
/// reported as having no solution, indistinguishable from true
/// unsolvability.
pub const DFS_MAX_DEPTH: u32 = 50;

/// How often the loop reports progress, in expansions.
const PROGRESS_INTERVAL: usize = 100;

/// Outcome of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Initial-to-goal path, one blank move per step, or `None` when the
    /// frontier was exhausted (or the parity gate refused the search).
    pub path: Option<Vec<Board>>,
    /// Nodes expanded before termination.
    pub expanded: usize,
}

impl SearchReport {
    /// The zero-work failure report returned by the solvability gate.
    pub(crate) fn unsolvable() -> Self {
        SearchReport {
            path: None,
            expanded: 0,
        }
    }
}

/// Frontier discipline: the only thing that distinguishes the strategies.
trait Frontier {
    fn push(&mut self, state: StateId);
    fn pop(&mut self) -> Option<StateId>;
}

/// FIFO queue for BFS.
#[derive(Default)]
struct Fifo(VecDeque<StateId>);

impl Frontier for Fifo {
    fn push(&mut self, state: StateId) {
        self.0.push_back(state);
    }

    fn pop(&mut self) -> Option<StateId> {
        self.0.pop_front()
    }
}

/// LIFO stack for DFS.
#[derive(Default)]
struct Lifo(Vec<StateId>);

impl Frontier for Lifo {
    fn push(&mut self, state: StateId) {
        self.0.push(state);
    }

    fn pop(&mut self) -> Option<StateId> {
        self.0.pop()
    }
}

/// A frontier entry with its accumulated cost, min-ordered by cost with the
/// state id as an arbitrary but deterministic tiebreak.
#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct CostedState {
    cost: u32,
    state: StateId,
}

/// Min-cost heap for UCS.
///
/// The cost of a state is how far its tiles have traveled from the *initial*
/// configuration, not how far they still are from the goal: the sum over
/// tiles 1-8 of the Manhattan distance between the tile's position here and
/// in the initial state, recomputed from scratch per candidate.
struct MinCost {
    heap: BinaryHeap<Reverse<CostedState>>,
    origin: Board,
}

impl MinCost {
    fn new(origin: Board) -> Self {
        MinCost {
            heap: BinaryHeap::new(),
            origin,
        }
    }
}

impl Frontier for MinCost {
    fn push(&mut self, state: StateId) {
        let cost = displacement(&Board::from_id(state), &self.origin);
        self.heap.push(Reverse(CostedState { cost, state }));
    }

    fn pop(&mut self) -> Option<StateId> {
        self.heap.pop().map(|Reverse(node)| node.state)
    }
}

/// Total Manhattan distance the numbered tiles have moved between two
/// arrangements.
pub fn displacement(board: &Board, origin: &Board) -> u32 {
    (1..TILES as u8)
        .map(|tile| {
            let (row, col) = board.position_of(tile);
            let (origin_row, origin_col) = origin.position_of(tile);
            (row.abs_diff(origin_row) + col.abs_diff(origin_col)) as u32
        })
        .sum()
}

/// Breadth-first search. First goal pop is a shortest path.
pub fn bfs(index: &StateIndex, initial: Board) -> Result<SearchReport, SearchError> {
    run(index, initial, Fifo::default(), None)
}

/// Depth-first search bounded at [`DFS_MAX_DEPTH`] moves.
///
/// Visited marks are never cleared on backtracking, so the path found is
/// usually far from shortest, and states beyond the bound are lost for the
/// rest of the search.
pub fn dfs(index: &StateIndex, initial: Board) -> Result<SearchReport, SearchError> {
    run(index, initial, Lifo::default(), Some(DFS_MAX_DEPTH))
}

/// Uniform-cost search ordered by displacement from the initial state.
pub fn ucs(index: &StateIndex, initial: Board) -> Result<SearchReport, SearchError> {
    run(index, initial, MinCost::new(initial), None)
}

/// The shared search loop.
///
/// A successor is admitted when unvisited and, under a depth bound, strictly
/// inside it. A successor already visited keeps its first-visit position in
/// the frontier, but its parent and metric are rewritten in place whenever a
/// strictly shorter path to it shows up; for BFS that check never fires, it
/// matters only for the LIFO discipline.
fn run<F: Frontier>(
    index: &StateIndex,
    initial: Board,
    mut frontier: F,
    depth_bound: Option<u32>,
) -> Result<SearchReport, SearchError> {
    let goal = Board::GOAL.id();

    // parent chain (None = search root), step count, visited flag; all
    // rank-addressed and full-space sized
    let mut parents: Vec<Option<StateId>> = vec![None; index.len()];
    let mut metrics: Vec<u32> = vec![0; index.len()];
    let mut visited: Vec<bool> = vec![false; index.len()];

    let initial_id = initial.id();
    let initial_rank = rank_of(index, initial_id)?;
    visited[initial_rank] = true;
    frontier.push(initial_id);

    let mut expanded = 0;

    while let Some(state) = frontier.pop() {
        let state_rank = rank_of(index, state)?;
        let metric = metrics[state_rank];

        if state == goal {
            let path = traceback(index, state, &parents)?;
            return Ok(SearchReport {
                path: Some(path),
                expanded,
            });
        }

        for successor in successors(state) {
            let successor_rank = rank_of(index, successor)?;
            let within_bound = depth_bound.map_or(true, |bound| metric + 1 < bound);

            if !visited[successor_rank] && within_bound {
                frontier.push(successor);
                parents[successor_rank] = Some(state);
                metrics[successor_rank] = metric + 1;
                visited[successor_rank] = true;
            } else if metrics[successor_rank] > metric + 1 {
                // shorter route to an already-seen state: redirect its
                // parent without re-enqueueing
                parents[successor_rank] = Some(state);
                metrics[successor_rank] = metric + 1;
            }
        }

        expanded += 1;
        if expanded % PROGRESS_INTERVAL == 0 {
            println!("{} nodes visited", expanded);
        }
    }

    Ok(SearchReport {
        path: None,
        expanded,
    })
}

fn rank_of(index: &StateIndex, state: StateId) -> Result<usize, SearchError> {
    index.rank(state).ok_or(SearchError::UnindexedState(state))
}

/// Walks the parent chain from the goal back to the search root, then
/// reverses into initial-to-goal order.
fn traceback(
    index: &StateIndex,
    goal: StateId,
    parents: &[Option<StateId>],
) -> Result<Vec<Board>, SearchError> {
    let mut path = vec![Board::from_id(goal)];
    let mut cursor = parents[rank_of(index, goal)?];
    while let Some(state) = cursor {
        path.push(Board::from_id(state));
        cursor = parents[rank_of(index, state)?];
    }
    path.reverse();
    Ok(path)
}
