//! Parsing of puzzle boards from text.
//!
//! The text format matches the generator's output and the solve binary's
//! input: one board row per line, tile values separated by whitespace, `0`
//! for the blank, and boards separated from each other by blank lines. The
//! library itself never touches the filesystem; binaries read the file and
//! hand the contents here.
use crate::engine::{Board, Tile};

/// Parses a single board from row strings.
///
/// # Arguments
/// * `rows`: one string per board row, tile values separated by whitespace.
///
/// # Returns
/// * `Ok(Board)` when every token parses and the assembled tile sequence
///   passes `Board::from_tiles` validation.
/// * `Err(String)` naming the offending token or the board defect.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_rows;
///
/// let board = board_from_rows(&["1 2 3", "4 0 6", "7 5 8"]).unwrap();
/// assert_eq!(board.dim(), 3);
///
/// assert!(board_from_rows(&["1 2", "3 x"]).is_err());
/// ```
pub fn board_from_rows(rows: &[&str]) -> Result<Board, String> {
    let mut tiles: Vec<Tile> = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        for token in row.split_whitespace() {
            let tile: Tile = token
                .parse()
                .map_err(|_| format!("Unrecognized tile value '{}' in row {}", token, i + 1))?;
            tiles.push(tile);
        }
    }
    Board::from_tiles(tiles)
}

/// Parses a multi-puzzle document: boards separated by blank lines.
///
/// Trailing blank lines are tolerated, so a file that ends with a newline
/// after the last board parses cleanly.
///
/// # Returns
/// * `Ok(Vec<Board>)` with the boards in document order.
/// * `Err(String)` if the document contains no boards, or any board fails
///   to parse; the message names the failing board's position.
pub fn boards_from_str(content: &str) -> Result<Vec<Board>, String> {
    let mut boards = Vec::new();
    let mut rows: Vec<&str> = Vec::new();

    for line in content.lines().chain(std::iter::once("")) {
        if line.trim().is_empty() {
            if !rows.is_empty() {
                let board = board_from_rows(&rows)
                    .map_err(|e| format!("Puzzle {}: {}", boards.len() + 1, e))?;
                boards.push(board);
                rows.clear();
            }
        } else {
            rows.push(line);
        }
    }

    if boards.is_empty() {
        return Err("No puzzles found in input".to_string());
    }
    Ok(boards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_rows_valid() {
        let board = board_from_rows(&["1 2 3", "4 0 6", "7 5 8"]).unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 0, 6, 7, 5, 8]);
    }

    #[test]
    fn test_board_from_rows_bad_token() {
        let result = board_from_rows(&["1 2 3", "4 x 6", "7 5 8"]);
        assert!(result.is_err());
        // Rows are reported 1-based, like puzzle numbers.
        let message = result.unwrap_err();
        assert!(message.contains("Unrecognized tile value 'x'"));
        assert!(message.contains("row 2"));
    }

    #[test]
    fn test_board_from_rows_rejects_malformed_board() {
        // Parses as numbers but is not a permutation.
        let result = board_from_rows(&["1 2 3", "4 4 6", "7 5 8"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_boards_from_str_multiple() {
        let content = "1 2 3\n4 0 6\n7 5 8\n\n1 2 3\n4 5 6\n7 8 0\n";
        let boards = boards_from_str(content).unwrap();
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[1], Board::goal(3));
    }

    #[test]
    fn test_boards_from_str_trailing_blank_lines() {
        let content = "1 2 3\n4 5 6\n7 8 0\n\n\n";
        let boards = boards_from_str(content).unwrap();
        assert_eq!(boards.len(), 1);
    }

    #[test]
    fn test_boards_from_str_empty_input() {
        assert!(boards_from_str("\n\n").is_err());
    }

    #[test]
    fn test_boards_from_str_names_failing_puzzle() {
        let content = "1 2 3\n4 5 6\n7 8 0\n\n1 2\n3 4\n";
        let result = boards_from_str(content);
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Puzzle 2:"));
    }
}
