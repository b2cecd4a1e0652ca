//! A* search over puzzle boards.
//!
//! The solver owns a goal board and its precomputed heuristic, and runs one
//! synchronous search per call: a binary-heap frontier ordered by `f = g + h`
//! (ties broken by insertion order), a discovered-set keyed on the canonical
//! tile sequence, and an arena of parent-linked nodes from which the winning
//! path is reconstructed. A search always runs to one of two terminal
//! outcomes: a root-to-goal path, or an empty path once the frontier is
//! exhausted, which can only happen for a genuinely unreachable goal.
use crate::engine::{Board, Move};
use crate::heuristics::Manhattan;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::time::{Duration, Instant};

/// The result of one search.
///
/// An empty `path` is the engine's explicit unsolvable signal; callers can
/// tell it apart from input errors, which surface as `Err` from
/// [`Solver::solve`] before any search runs.
#[derive(Clone, Debug)]
pub struct Solution {
    /// The solution states in order, root first, goal last. The root step is
    /// labeled `Move::Start`; every later step carries the blank move that
    /// produced it. Empty when the goal is unreachable.
    pub path: Vec<(Move, Board)>,
    /// Number of states popped from the frontier during the search.
    pub expanded: usize,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
}

impl Solution {
    /// True when a path to the goal was found.
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// The move labels along the path, `Start` excluded, so the sequence can
    /// be replayed against the initial board.
    pub fn moves(&self) -> Vec<Move> {
        self.path
            .iter()
            .map(|(mv, _)| *mv)
            .filter(|&mv| mv != Move::Start)
            .collect()
    }

    /// Number of moves in the solution (path length minus the root).
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// Search nodes live in a flat arena and refer to their parent by index, so
// the tree stays acyclic without shared mutable structure.
struct Node {
    board: Board,
    parent: Option<usize>,
    mv: Move,
    g: u32,
}

// Frontier entry. `BinaryHeap` is a max-heap, so the ordering is reversed on
// `f` to pop the lowest ranking score first. Equal scores pop in insertion
// order (`seq` ascending), which pins down which of several equal-cost
// optimal paths a run returns.
struct OpenEntry {
    f: u32,
    seq: u64,
    node: usize,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// A* solver bound to a fixed goal board.
///
/// Each call to [`Solver::solve`] owns its frontier, discovered-set and node
/// arena exclusively, so one solver value can serve many searches in turn
/// and separate solver values can run in parallel without sharing state.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::Board;
/// use npuzzle_solver::solver::Solver;
///
/// let solver = Solver::for_dim(3);
/// let puzzle = Board::from_tiles(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// let solution = solver.solve(&puzzle).unwrap();
/// assert_eq!(solution.move_count(), 2);
/// ```
pub struct Solver {
    goal: Board,
    heuristic: Manhattan,
}

impl Solver {
    /// Creates a solver that searches toward the given goal board.
    pub fn new(goal: Board) -> Solver {
        let heuristic = Manhattan::new(&goal);
        Solver { goal, heuristic }
    }

    /// Creates a solver for the canonical ascending-fill goal of the given
    /// dimension (blank in the final cell).
    pub fn for_dim(dim: usize) -> Solver {
        Solver::new(Board::goal(dim))
    }

    /// Returns the goal board this solver searches toward.
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Runs A* from `initial` toward the solver's goal.
    ///
    /// # Returns
    /// * `Ok(Solution)` — solved (path root to goal) or exhausted (empty
    ///   path). The engine does not depend on a solvability pre-check to
    ///   terminate; an unreachable goal simply drains the frontier.
    /// * `Err(String)` if `initial` does not match the goal's dimension.
    pub fn solve(&self, initial: &Board) -> Result<Solution, String> {
        if initial.dim() != self.goal.dim() {
            return Err(format!(
                "Puzzle is {0}x{0} but the goal is {1}x{1}",
                initial.dim(),
                self.goal.dim()
            ));
        }

        let start = Instant::now();

        let mut nodes: Vec<Node> = Vec::new();
        let mut frontier: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut discovered: HashSet<Vec<u8>> = HashSet::new();
        let mut seq = 0u64;
        let mut expanded = 0usize;

        // Seed the frontier and the discovered-set with the initial state.
        discovered.insert(initial.tiles().to_vec());
        nodes.push(Node {
            board: initial.clone(),
            parent: None,
            mv: Move::Start,
            g: 0,
        });
        frontier.push(OpenEntry {
            f: self.heuristic.estimate(initial),
            seq,
            node: 0,
        });

        while let Some(entry) = frontier.pop() {
            expanded += 1;
            let current = entry.node;

            if nodes[current].board == self.goal {
                return Ok(Solution {
                    path: reconstruct_path(&nodes, current),
                    expanded,
                    elapsed: start.elapsed(),
                });
            }

            let g = nodes[current].g + 1;
            for (mv, board) in nodes[current].board.neighbors() {
                // Record each arrangement the first time it is generated so
                // the frontier never holds duplicate entries for it.
                if !discovered.insert(board.tiles().to_vec()) {
                    continue;
                }
                let f = g + self.heuristic.estimate(&board);
                let index = nodes.len();
                nodes.push(Node {
                    board,
                    parent: Some(current),
                    mv,
                    g,
                });
                seq += 1;
                frontier.push(OpenEntry { f, seq, node: index });
            }
        }

        // Frontier drained without reaching the goal: unreachable pair.
        Ok(Solution {
            path: Vec::new(),
            expanded,
            elapsed: start.elapsed(),
        })
    }
}

/// Walks parent links from `leaf` back to the root, then reverses so the
/// path runs root to goal.
fn reconstruct_path(nodes: &[Node], leaf: usize) -> Vec<(Move, Board)> {
    let mut path = Vec::new();
    let mut current = Some(leaf);
    while let Some(index) = current {
        let node = &nodes[index];
        path.push((node.mv, node.board.clone()));
        current = node.parent;
    }
    path.reverse();
    path
}
