mod board;
mod error;
mod heuristic;
mod scramble;
mod search;
mod worker;

mod prelude;
use prelude::*;


#[cfg(test)]
#[macro_use]
extern crate quickcheck_macros;

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "slidetile")]
#[command(about = "Optimal solutions for N x N sliding-tile puzzles")]
struct Args {
    /// Board width and height.
    #[arg(long, default_value_t = 4)]
    size: usize,

    /// Goal layout, e.g. "1 2 3 4 5 6 7 8 0". Default: tiles in order, blank last.
    #[arg(long)]
    goal: Option<String>,

    /// Start layout. Default: a scramble of the goal.
    #[arg(long, conflicts_with = "listing")]
    start: Option<String>,

    /// File with one start layout per line.
    #[arg(long)]
    listing: Option<PathBuf>,

    /// Random moves used to scramble the goal when no start is given.
    #[arg(long, default_value_t = 20)]
    moves: usize,

    /// Seed for the scrambler.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = HeuristicKind::Hamming)]
    heuristic: HeuristicKind,

    /// Give up on a puzzle after this many milliseconds.
    #[arg(long)]
    timeout_ms: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = args
        .log_level
        .parse::<log::LevelFilter>()
        .with_context(|| format!("Unknown log level {:?}", args.log_level))?;
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let goal = match &args.goal {
        Some(goal) => goal.parse::<Board>().context("Invalid goal")?,
        None => Board::solved(args.size).context("Invalid --size")?,
    };
    let starts = start_layouts(&args, &goal)?;
    let timeout = args.timeout_ms.map(Duration::from_millis);

    let mut all_found = true;
    for start in starts {
        start.check_same_size(&goal)?;
        if !start.is_solvable_from(&goal) {
            log::warn!("Start has the wrong parity, expecting exhaustion");
        }

        println!("{}", start);
        let outcome = spawn_search(args.heuristic, start, goal.clone()).wait(timeout)?;
        match outcome.into_path() {
            Some(path) => print_path(&path),
            None => {
                eprintln!("* Path not found.");
                all_found = false;
            }
        }
    }

    if !all_found {
        std::process::exit(1);
    }
    Ok(())
}

fn start_layouts(args: &Args, goal: &Board) -> anyhow::Result<Vec<Board>> {
    if let Some(listing) = &args.listing {
        let text = std::fs::read_to_string(listing)
            .with_context(|| format!("Reading {}", listing.display()))?;
        return parse_listing(&text, goal.size())
            .with_context(|| format!("Parsing {}", listing.display()));
    }

    if let Some(start) = &args.start {
        return Ok(vec![start.parse::<Board>().context("Invalid start")?]);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    Ok(vec![scramble(goal, args.moves, &mut rng)])
}

fn print_path(path: &Path) {
    println!("* {} steps needed.", path.cost());
    let moves = core::iter::once(None).chain(path.moves().map(Some));
    for (state, move_) in path.into_iter().zip(moves) {
        match move_ {
            Some(m) => println!("{}. {}\n{}", state.g(), m, state.board()),
            None => println!("{}. start\n{}", state.g(), state.board()),
        }
    }
}
