//! Core state model for the sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the direction the blank slides to produce a state, plus the
//!   `Start` label carried by the root of a solution path.
//! - `Board`: a validated tile arrangement with the blank's index cached,
//!   including neighbor generation, solvability analysis, and random
//!   scrambling for puzzle generation.
use rand::Rng;
use std::fmt;

/// A single tile value. `0` represents the blank cell.
pub type Tile = u8;

/// The move that produced a state from its parent.
///
/// Directions name the way the *blank* slides, not the tile that fills its
/// place. `Start` labels the root of a solution path, which has no parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Root of a solution path; no move was applied.
    Start,
    /// Blank slides one column left.
    Left,
    /// Blank slides one column right.
    Right,
    /// Blank slides one row down.
    Down,
    /// Blank slides one row up.
    Up,
}

// Enumeration order for neighbor generation. The order is fixed so that
// search results are reproducible run to run.
const DIRECTIONS: [Move; 4] = [Move::Left, Move::Right, Move::Down, Move::Up];

impl Move {
    /// Returns the `(row, col)` offset the blank travels for this move,
    /// or `None` for `Start`.
    pub fn delta(&self) -> Option<(isize, isize)> {
        match self {
            Move::Start => None,
            Move::Left => Some((0, -1)),
            Move::Right => Some((0, 1)),
            Move::Down => Some((1, 0)),
            Move::Up => Some((-1, 0)),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Start => "Start",
            Move::Left => "Left",
            Move::Right => "Right",
            Move::Down => "Down",
            Move::Up => "Up",
        };
        write!(f, "{}", s)
    }
}

/// A board position for the sliding-tile puzzle.
///
/// Tiles are stored row-major in a flat vector; `0` is the blank. A `Board`
/// is immutable once constructed: neighbor generation always allocates a new
/// board and never mutates the source. Two boards are equal iff their tile
/// sequences match; search bookkeeping (cost, parent) lives in the solver,
/// not here.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::Board;
///
/// let board = Board::from_tiles(vec![1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
/// assert_eq!(board.dim(), 3);
/// assert_eq!(board.blank_index(), 4);
///
/// // Values outside 0..n^2-1 are rejected at construction.
/// assert!(Board::from_tiles(vec![1, 2, 3, 9]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Vec<Tile>,
    dim: usize,
    blank: usize,
}

impl Board {
    /// Creates a board from a flat row-major tile sequence, validating it.
    ///
    /// # Arguments
    /// * `tiles`: the tile values, `0` for the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if `tiles` has perfect-square length and contains every
    ///   value in `0..tiles.len()` exactly once.
    /// * `Err(String)` describing the defect otherwise (non-square length,
    ///   out-of-range value, or duplicated value). A malformed board is never
    ///   silently repaired.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Board, String> {
        let len = tiles.len();
        let dim = (len as f64).sqrt() as usize;
        if dim < 2 || dim * dim != len {
            return Err(format!(
                "Board length {} is not a perfect square of a dimension >= 2",
                len
            ));
        }

        let mut seen = vec![false; len];
        for &tile in &tiles {
            let value = tile as usize;
            if value >= len {
                return Err(format!(
                    "Tile value {} is out of range for a {}x{} board",
                    value, dim, dim
                ));
            }
            if seen[value] {
                return Err(format!("Tile value {} appears more than once", value));
            }
            seen[value] = true;
        }
        // All len values in 0..len are distinct, so the blank exists.
        let blank = tiles.iter().position(|&t| t == 0).unwrap();

        Ok(Board { tiles, dim, blank })
    }

    /// Creates the canonical goal board for the given dimension: tiles
    /// `1, 2, ..., n^2-1` in ascending order with the blank in the last cell.
    ///
    /// # Panics
    /// Panics unless `2 <= dim <= 16`; tile values are `u8`, so a 16x16
    /// board (values `0..=255`) is the largest representable one, matching
    /// the range [`Board::from_tiles`] accepts.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::Board;
    ///
    /// let goal = Board::goal(3);
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// ```
    pub fn goal(dim: usize) -> Board {
        assert!(
            dim >= 2 && dim * dim <= usize::from(Tile::MAX) + 1,
            "Board dimension must be between 2 and 16, got {}",
            dim
        );
        let len = dim * dim;
        let mut tiles: Vec<Tile> = (1..len).map(|v| v as Tile).collect();
        tiles.push(0);
        Board {
            tiles,
            dim,
            blank: len - 1,
        }
    }

    /// Returns the side dimension of the board (the board is `dim` x `dim`).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the flat row-major tile sequence.
    ///
    /// This doubles as the board's canonical key: two boards are the same
    /// arrangement iff their tile sequences are identical element-wise, and
    /// the solver's discovered-set is keyed on exactly this byte sequence.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the flat index of the blank cell.
    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// Returns the `(row, col)` position of the blank cell.
    pub fn blank_pos(&self) -> (usize, usize) {
        (self.blank / self.dim, self.blank % self.dim)
    }

    /// Slides the blank one cell in the given direction, producing a new
    /// board and leaving this one untouched.
    ///
    /// # Returns
    /// * `Some(Board)` with the blank and the adjacent tile swapped.
    /// * `None` if the move would leave the board, or if `mv` is `Start`.
    pub fn slide(&self, mv: Move) -> Option<Board> {
        let (dr, dc) = mv.delta()?;
        let (row, col) = self.blank_pos();
        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        if new_row < 0
            || new_row >= self.dim as isize
            || new_col < 0
            || new_col >= self.dim as isize
        {
            return None;
        }

        let target = new_row as usize * self.dim + new_col as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(Board {
            tiles,
            dim: self.dim,
            blank: target,
        })
    }

    /// Generates every valid successor of this board, in the fixed order
    /// Left, Right, Down, Up.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, an interior
    /// blank 4. Each successor is a fresh allocation paired with the move
    /// that produced it; the source board is never mutated.
    pub fn neighbors(&self) -> Vec<(Move, Board)> {
        let mut next = Vec::with_capacity(4);
        for mv in DIRECTIONS {
            if let Some(board) = self.slide(mv) {
                next.push((mv, board));
            }
        }
        next
    }

    /// Applies a sequence of moves in order, failing on the first move that
    /// would leave the board.
    ///
    /// `Start` labels are skipped, so a solution path's move labels can be
    /// replayed directly against the initial board.
    pub fn apply_moves(&self, moves: &[Move]) -> Result<Board, String> {
        let mut board = self.clone();
        for (i, &mv) in moves.iter().enumerate() {
            if mv == Move::Start {
                continue;
            }
            board = board
                .slide(mv)
                .ok_or_else(|| format!("Move {} ({}) is out of bounds", i, mv))?;
        }
        Ok(board)
    }

    /// Produces a guaranteed-solvable board by walking `steps` random
    /// neighbor transitions away from this board.
    ///
    /// The caller supplies the random generator, so scrambles are
    /// reproducible from a seed. The returned board carries no link back to
    /// the walk that produced it.
    ///
    /// # Arguments
    /// * `steps`: number of random blank moves to apply, typically 15-50.
    /// * `rng`: the random source used to pick each move.
    pub fn scrambled(&self, steps: usize, rng: &mut impl Rng) -> Board {
        let mut board = self.clone();
        for _ in 0..steps {
            let next = board.neighbors();
            let pick = rng.gen_range(0..next.len());
            board = next.into_iter().nth(pick).map(|(_, b)| b).unwrap();
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as a grid, one row per line, the blank as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dim {
            for col in 0..self.dim {
                let tile = self.tiles[row * self.dim + col];
                if tile == 0 {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:<3}", tile)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Counts inversions of `initial` relative to the tile ordering defined by
/// `goal`.
///
/// Both boards are flattened row-major with the blank removed. A pair
/// `(a, b)` with `a` before `b` in `initial` counts as an inversion when
/// `a`'s position in `goal` is not before `b`'s. At the goal itself the
/// count is zero.
///
/// # Panics
/// Panics in debug builds if the boards differ in dimension; callers
/// validate this before counting.
pub fn count_inversions(initial: &Board, goal: &Board) -> usize {
    debug_assert_eq!(initial.dim(), goal.dim());

    // goal_index[value] = flat position of that value in the goal.
    let mut goal_index = vec![0usize; goal.tiles().len()];
    for (i, &tile) in goal.tiles().iter().enumerate() {
        goal_index[tile as usize] = i;
    }

    let sequence: Vec<usize> = initial
        .tiles()
        .iter()
        .filter(|&&t| t != 0)
        .map(|&t| goal_index[t as usize])
        .collect();

    let mut inversions = 0;
    for i in 0..sequence.len() {
        for j in i + 1..sequence.len() {
            if sequence[i] >= sequence[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Reports whether `goal` is reachable from `initial`, without searching.
///
/// Uses inversion-count parity. For odd dimensions the goal is reachable iff
/// the inversion count is even. For even dimensions a vertical blank move
/// shifts one tile across `dim - 1` flattened positions and flips the
/// inversion parity, while horizontal moves leave it unchanged; matching the
/// parities at both endpoints gives: reachable iff
/// `inversions + blank_row(initial) + blank_row(goal)` is even.
///
/// This check is advisory. The search engine terminates on its own by
/// exhausting the frontier even when the check is skipped.
///
/// # Returns
/// * `Ok(bool)` with the reachability verdict.
/// * `Err(String)` if the boards differ in dimension.
pub fn is_solvable(initial: &Board, goal: &Board) -> Result<bool, String> {
    if initial.dim() != goal.dim() {
        return Err(format!(
            "Cannot compare a {0}x{0} board against a {1}x{1} goal",
            initial.dim(),
            goal.dim()
        ));
    }

    let inversions = count_inversions(initial, goal);
    if initial.dim() % 2 == 1 {
        Ok(inversions % 2 == 0)
    } else {
        let (initial_row, _) = initial.blank_pos();
        let (goal_row, _) = goal.blank_pos();
        Ok((inversions + initial_row + goal_row) % 2 == 0)
    }
}
