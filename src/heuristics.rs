//! Heuristic evaluation for the A* search.
//!
//! The only estimator here is the Manhattan-distance sum, which is both
//! admissible (never overestimates the true remaining move count) and
//! consistent (a single blank move changes at most one tile's distance term,
//! and by exactly one). Those two properties are what let the solver treat
//! the first pop of any arrangement as final.
use crate::engine::Board;

/// Manhattan-distance estimator precomputed against a goal board.
///
/// Construction walks the goal once to index each tile's home `(row, col)`,
/// so every subsequent estimate is a single pass over the board.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::Board;
/// use npuzzle_solver::heuristics::Manhattan;
///
/// let goal = Board::goal(3);
/// let heuristic = Manhattan::new(&goal);
/// assert_eq!(heuristic.estimate(&goal), 0);
///
/// let two_away = Board::from_tiles(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// assert_eq!(heuristic.estimate(&two_away), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Manhattan {
    dim: usize,
    // home[value] = (row, col) of that value in the goal.
    home: Vec<(usize, usize)>,
}

impl Manhattan {
    /// Builds the estimator for the given goal board.
    pub fn new(goal: &Board) -> Manhattan {
        let dim = goal.dim();
        let mut home = vec![(0, 0); goal.tiles().len()];
        for (i, &tile) in goal.tiles().iter().enumerate() {
            home[tile as usize] = (i / dim, i % dim);
        }
        Manhattan { dim, home }
    }

    /// Sums, over every non-blank tile, the Manhattan distance between the
    /// tile's current cell and its cell in the goal.
    ///
    /// # Panics
    /// Panics in debug builds if `board` does not match the goal's
    /// dimension; the solver validates this before searching.
    pub fn estimate(&self, board: &Board) -> u32 {
        debug_assert_eq!(board.dim(), self.dim);
        let mut h = 0u32;
        for (i, &tile) in board.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let (row, col) = (i / self.dim, i % self.dim);
            let (home_row, home_col) = self.home[tile as usize];
            h += row.abs_diff(home_row) as u32 + col.abs_diff(home_col) as u32;
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Move;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::{HashSet, VecDeque};

    /// True minimal move count by breadth-first search, for cross-checks.
    fn bfs_distance(initial: &Board, goal: &Board) -> Option<u32> {
        let mut seen: HashSet<Vec<u8>> = HashSet::new();
        let mut queue = VecDeque::new();
        seen.insert(initial.tiles().to_vec());
        queue.push_back((initial.clone(), 0u32));

        while let Some((board, depth)) = queue.pop_front() {
            if board == *goal {
                return Some(depth);
            }
            for (_, next) in board.neighbors() {
                if seen.insert(next.tiles().to_vec()) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
        None
    }

    #[test]
    fn test_estimate_zero_at_goal() {
        let goal = Board::goal(4);
        let heuristic = Manhattan::new(&goal);
        assert_eq!(heuristic.estimate(&goal), 0);
    }

    #[test]
    fn test_estimate_single_move() {
        let goal = Board::goal(3);
        let heuristic = Manhattan::new(&goal);
        let one_away = goal.slide(Move::Up).unwrap();
        assert_eq!(heuristic.estimate(&one_away), 1);
    }

    #[test]
    fn test_estimate_against_non_canonical_goal() {
        let goal = Board::from_tiles(vec![0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let heuristic = Manhattan::new(&goal);
        assert_eq!(heuristic.estimate(&goal), 0);

        // Tile 1 one column from home, everything else in place.
        let shifted = Board::from_tiles(vec![1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(heuristic.estimate(&shifted), 1);
    }

    #[test]
    fn test_admissible_on_scrambles() {
        let goal = Board::goal(3);
        let heuristic = Manhattan::new(&goal);
        let mut rng = SmallRng::seed_from_u64(99);

        for steps in [5, 10, 15, 20, 25] {
            let board = goal.scrambled(steps, &mut rng);
            let optimal = bfs_distance(&board, &goal).unwrap();
            assert!(
                heuristic.estimate(&board) <= optimal,
                "estimate {} exceeds optimal {} for {:?}",
                heuristic.estimate(&board),
                optimal,
                board.tiles()
            );
        }
    }

    #[test]
    fn test_consistent_across_single_moves() {
        let goal = Board::goal(3);
        let heuristic = Manhattan::new(&goal);
        let mut rng = SmallRng::seed_from_u64(3);

        for steps in 0..30 {
            let board = goal.scrambled(steps, &mut rng);
            let h = heuristic.estimate(&board) as i64;
            for (_, next) in board.neighbors() {
                let h_next = heuristic.estimate(&next) as i64;
                // Unit edge cost: consistency means |h - h'| <= 1.
                assert!((h - h_next).abs() <= 1);
            }
        }
    }
}
