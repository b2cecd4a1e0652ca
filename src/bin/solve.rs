use clap::Parser;
use npuzzle_solver::batch::{solve_all, solve_all_parallel};
use npuzzle_solver::engine::{self, Board};
use npuzzle_solver::utils::boards_from_str;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the puzzle file (rows of tile values, puzzles separated by
    /// blank lines, 0 for the blank)
    puzzle_file: PathBuf,

    /// Solve the puzzles across a thread pool instead of one at a time
    #[clap(short, long)]
    parallel: bool,

    /// Thread pool size; defaults to available hardware parallelism
    #[clap(short, long)]
    threads: Option<usize>,

    /// Print every intermediate board along each solution path
    #[clap(short, long)]
    show_boards: bool,
}

fn read_puzzle_file(path: &PathBuf) -> Result<Vec<Board>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    boards_from_str(&content)
}

fn main() {
    let args = Args::parse();

    let puzzles = read_puzzle_file(&args.puzzle_file)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", args.puzzle_file.display(), e));
    println!(
        "Loaded {} puzzle(s) from {}\n",
        puzzles.len(),
        args.puzzle_file.display()
    );

    // Advisory pre-check; unsolvable puzzles still run to frontier
    // exhaustion and report an empty path.
    for (i, puzzle) in puzzles.iter().enumerate() {
        let goal = Board::goal(puzzle.dim());
        match engine::is_solvable(puzzle, &goal) {
            Ok(true) => {}
            Ok(false) => println!("Warning: puzzle {} is not solvable", i + 1),
            Err(e) => println!("Warning: puzzle {}: {}", i + 1, e),
        }
    }

    let batch_start = Instant::now();
    let result = if args.parallel {
        solve_all_parallel(&puzzles, args.threads)
    } else {
        solve_all(&puzzles)
    };
    let batch_elapsed = batch_start.elapsed();

    let solutions = result.unwrap_or_else(|e| panic!("Batch failed: {}", e));

    let mut total_expanded = 0usize;
    for (i, (puzzle, solution)) in puzzles.iter().zip(&solutions).enumerate() {
        total_expanded += solution.expanded;
        println!("Puzzle {}:", i + 1);
        print!("{}", puzzle);

        if solution.is_solved() {
            let moves = solution.moves();
            println!(
                "Solved in {} moves, {} nodes expanded, {:.3} ms",
                moves.len(),
                solution.expanded,
                solution.elapsed.as_secs_f64() * 1000.0
            );
            if args.show_boards {
                for (mv, board) in &solution.path {
                    println!("{}", mv);
                    print!("{}", board);
                }
            } else {
                let labels: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
                println!("Moves: {}", labels.join(", "));
            }
        } else {
            println!(
                "No solution ({} nodes expanded, {:.3} ms)",
                solution.expanded,
                solution.elapsed.as_secs_f64() * 1000.0
            );
        }
        println!();
    }

    println!(
        "Total: {} puzzle(s), {} nodes expanded, {:.3} ms wall clock",
        puzzles.len(),
        total_expanded,
        batch_elapsed.as_secs_f64() * 1000.0
    );
}
