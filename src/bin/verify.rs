//! Standalone board-validator front-end, the way `splr` pairs its solving
//! binary with a `dmcr` model-checker binary backed by `src/validator.rs`.
use std::fs;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "verify", about = "Checks a completed Sudoku board against the row/column/box invariants", version)]
struct Cli {
    /// 81-character completed board. Omit when using --file.
    board: Option<String>,

    #[arg(long)]
    file: Option<std::path::PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let board = match (&cli.board, &cli.file) {
        (Some(b), None) => b.trim().to_string(),
        (None, Some(path)) => match fs::read_to_string(path) {
            Ok(contents) => contents.trim().to_string(),
            Err(e) => {
                eprintln!("error reading {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("provide exactly one of a board argument or --file");
            return ExitCode::FAILURE;
        }
    };

    match triadoku::solver::verify_board(&board) {
        Ok(()) => {
            println!("valid");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("invalid: {}", e);
            ExitCode::FAILURE
        }
    }
}
