//! # N-Puzzle Solver Library
//!
//! This library solves sliding-tile puzzles (8-puzzle, 15-puzzle, and larger
//! square boards) with A* search over a Manhattan-distance heuristic.
//!
//! It is used by two binaries:
//! - `solve`: reads one or more puzzles from a file and reports the optimal
//!   move sequence, expanded-node count, and timing for each, sequentially
//!   or across a thread pool.
//! - `generate`: emits random guaranteed-solvable puzzles by scrambling a
//!   goal board with a seedable random walk.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), move labels (`Move`),
//!   neighbor generation, inversion-parity solvability analysis, and random
//!   scrambling.
//! - `heuristics`: the Manhattan-distance estimator used to rank the search
//!   frontier.
//! - `solver`: the A* search engine (`Solver`) and its `Solution` result.
//! - `batch`: sequential and thread-pool solving of independent puzzle
//!   collections.
//! - `utils`: parsing boards from text.

pub mod batch;
pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;
