use clap::Parser;
use npuzzle_solver::engine::Board;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of puzzles to generate
    #[clap(short, long, default_value_t = 1)]
    count: usize,

    /// Board dimension (3 for the 8-puzzle, 4 for the 15-puzzle)
    #[clap(short, long, default_value_t = 3)]
    dim: usize,

    /// Seed for the random walk; omit for a fresh seed each run
    #[clap(short, long)]
    seed: Option<u64>,

    /// Minimum number of scramble moves per puzzle
    #[clap(long, default_value_t = 15)]
    min_moves: usize,

    /// Maximum number of scramble moves per puzzle
    #[clap(long, default_value_t = 50)]
    max_moves: usize,
}

fn main() {
    let args = Args::parse();
    if args.dim < 2 || args.dim > 16 {
        panic!("Board dimension must be between 2 and 16");
    }
    if args.min_moves > args.max_moves {
        panic!(
            "min-moves ({}) exceeds max-moves ({})",
            args.min_moves, args.max_moves
        );
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = SmallRng::seed_from_u64(seed);
    eprintln!("Generating {} puzzle(s) with seed {}", args.count, seed);

    let goal = Board::goal(args.dim);
    for _ in 0..args.count {
        let steps = rng.gen_range(args.min_moves..=args.max_moves);
        let puzzle = goal.scrambled(steps, &mut rng);
        for row in 0..args.dim {
            let cells: Vec<String> = (0..args.dim)
                .map(|col| puzzle.tiles()[row * args.dim + col].to_string())
                .collect();
            println!("{}", cells.join(" "));
        }
        println!();
    }
}
