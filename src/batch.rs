//! Batch solving of independent puzzle collections.
//!
//! Each puzzle in a batch is solved against the canonical goal of its own
//! dimension, so a single batch may mix board sizes. The parallel mode fans
//! the puzzles out over a fixed-size rayon pool; every worker builds its own
//! solver, frontier and discovered-set, so nothing is shared between
//! concurrent searches, and results come back in input order regardless of
//! completion order.
use crate::engine::Board;
use crate::solver::{Solution, Solver};
use rayon::prelude::*;

fn solve_one(puzzle: &Board) -> Result<Solution, String> {
    Solver::for_dim(puzzle.dim()).solve(puzzle)
}

/// Solves the batch one puzzle at a time, in input order.
///
/// # Returns
/// * `Ok(Vec<Solution>)` with one entry per input puzzle, in input order.
///   Unsolvable puzzles contribute a `Solution` with an empty path, not an
///   error.
/// * `Err(String)` if any solve fails outright; the remaining puzzles are
///   still attempted first.
pub fn solve_all(puzzles: &[Board]) -> Result<Vec<Solution>, String> {
    let results: Vec<Result<Solution, String>> = puzzles.iter().map(solve_one).collect();
    results.into_iter().collect()
}

/// Solves the batch across a fixed-size thread pool.
///
/// # Arguments
/// * `puzzles`: the independent puzzles to solve.
/// * `threads`: pool size; `None` sizes the pool to available hardware
///   parallelism.
///
/// # Returns
/// The same per-puzzle results as [`solve_all`], re-associated with their
/// input positions. All puzzles are attempted before any failure is
/// reported, so one bad worker never drops another puzzle's result.
pub fn solve_all_parallel(
    puzzles: &[Board],
    threads: Option<usize>,
) -> Result<Vec<Solution>, String> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.unwrap_or(0))
        .build()
        .map_err(|e| format!("Failed to build thread pool: {}", e))?;

    let results: Vec<Result<Solution, String>> =
        pool.install(|| puzzles.par_iter().map(solve_one).collect());
    results.into_iter().collect()
}
