//! 8-Puzzle Solver
//!
//! Solves the 3x3 sliding tile puzzle toward the fixed goal (tiles 1-8 in
//! order, blank bottom-right) with a choice of breadth-first, depth-bounded
//! depth-first, or uniform-cost search, printing the move-by-move solution
//! path or a definitive "no solution".

use clap::{Parser, Subcommand, ValueEnum};

use slider::board::Board;
use slider::index::StateIndex;
use slider::search::SearchReport;
use slider::{Puzzle, Strategy};

/// Solves the 8-puzzle from a given or built-in initial state.
#[derive(Parser)]
#[command(name = "slider")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one initial state given as nine tiles, e.g. "1,0,2,3,4,5,6,7,8".
    Solve {
        state: String,
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Bfs)]
        strategy: StrategyArg,
    },
    /// Run the built-in demo states.
    Demo {
        #[arg(short, long, value_enum, default_value_t = StrategyArg::Bfs)]
        strategy: StrategyArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Bfs,
    Dfs,
    Ucs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Dfs => Strategy::Dfs,
            StrategyArg::Ucs => Strategy::Ucs,
        }
    }
}

/// Demo states, increasingly scrambled; two sit in the unsolvable parity
/// class on purpose.
const DEMO_STATES: [[u8; 9]; 5] = [
    [5, 1, 2, 6, 3, 0, 4, 7, 8],
    [2, 8, 3, 1, 6, 4, 7, 5, 0],
    [1, 0, 2, 3, 4, 5, 6, 7, 8],
    [4, 3, 5, 6, 0, 8, 2, 1, 7],
    [1, 7, 3, 0, 5, 4, 6, 2, 8],
];

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve { state, strategy }) => {
            let initial = match state.parse::<Board>() {
                Ok(board) => board,
                Err(e) => {
                    eprintln!("invalid state: {}", e);
                    std::process::exit(2);
                }
            };
            let index = StateIndex::build();
            run_solve(initial, strategy.into(), &index);
        }
        Some(Command::Demo { strategy }) => run_demo(strategy.into()),
        None => run_demo(Strategy::Bfs),
    }
}

/// Solves every built-in demo state with one strategy.
fn run_demo(strategy: Strategy) {
    let index = StateIndex::build();
    for tiles in DEMO_STATES {
        run_solve(Board::new(tiles), strategy, &index);
        println!();
    }
}

/// Runs one search and prints the outcome.
fn run_solve(initial: Board, strategy: Strategy, index: &StateIndex) {
    let puzzle = Puzzle::new(initial);
    match puzzle.solution(strategy, index) {
        Ok(report) => {
            print!("{}", render(&initial, &report));
            if report.path.is_some() && report.expanded > 0 {
                println!("{} succeeded after trying {} times", strategy, report.expanded);
            }
        }
        Err(e) => {
            eprintln!("search failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Formats a search outcome: a header naming the initial state, then one
/// numbered line per path step, or a single no-solution line.
fn render(initial: &Board, report: &SearchReport) -> String {
    let mut output = String::new();
    match &report.path {
        Some(path) => {
            output.push_str(&format!(
                "solution for the initial state: {}\n",
                tiles_line(initial)
            ));
            for (step, board) in path.iter().enumerate() {
                output.push_str(&format!("step: {:03}: {}\n", step, tiles_line(board)));
            }
        }
        None => {
            output.push_str(&format!(
                "no solution for the initial state: {}\n",
                tiles_line(initial)
            ));
        }
    }
    output
}

/// The nine tiles of a state on one space-separated line.
fn tiles_line(board: &Board) -> String {
    board
        .tiles()
        .iter()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
