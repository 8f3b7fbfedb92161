//! Thin CLI wrapper around `triadoku::solve`.
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use triadoku::SolverConfig;

#[derive(Parser, Debug)]
#[command(name = "triadoku", about = "A triad-encoded, SCC-accelerated DPLL Sudoku solver", version)]
struct Cli {
    /// Puzzle string (81 classic or 729 pencilmark characters). Omit when using --file.
    puzzle: Option<String>,

    /// Read the puzzle from a file instead of the command line.
    #[arg(long)]
    file: Option<std::path::PathBuf>,

    /// Maximum number of solutions to enumerate.
    #[arg(long, default_value_t = 1)]
    limit: usize,

    /// Enable the SCC inference rule.
    #[arg(long)]
    scc_inference: bool,

    /// Use the SCC engine's largest component as the branching heuristic.
    #[arg(long)]
    scc_heuristic: bool,

    /// Use the compressed-sparse-row adjacency backend.
    #[arg(long)]
    csr_backend: bool,

    /// Fork the first branching decision across two threads.
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let puzzle = match (&cli.puzzle, &cli.file) {
        (Some(p), None) => p.trim().to_string(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(contents) => contents.trim().to_string(),
            Err(e) => {
                eprintln!("error reading {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("provide exactly one of a puzzle argument or --file");
            return ExitCode::FAILURE;
        }
    };

    let mut config = SolverConfig::empty();
    config.set(SolverConfig::SCC_INFERENCE, cli.scc_inference);
    config.set(SolverConfig::SCC_HEURISTIC, cli.scc_heuristic);
    config.set(SolverConfig::CSR_BACKEND, cli.csr_backend);
    config.set(SolverConfig::PARALLEL_DEPTH1, cli.parallel);

    match triadoku::solve(&puzzle, cli.limit, config) {
        Ok(outcome) => {
            println!("solutions: {}", outcome.solution_count);
            println!("guesses: {}", outcome.guesses);
            match outcome.board {
                Some(board) => println!("{}", board),
                None => println!("no solution found"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
