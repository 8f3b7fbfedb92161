use pretty_assertions::assert_eq;
use triadoku::{solve, SolverConfig};

const DEFAULT_CONFIG: SolverConfig =
    SolverConfig::from_bits_truncate(SolverConfig::SCC_INFERENCE.bits() | SolverConfig::SCC_HEURISTIC.bits());

/// S1: classic "hardest" puzzle has a unique completion.
#[test]
fn s1_hardest_classic_has_a_unique_solution() {
    let puzzle = "..53.....8......2..7..1.5..4....53...1..7...6..32...8..6.5....9..4....3......97..";
    assert_eq!(puzzle.len(), 81);
    let outcome = solve(puzzle, 1, DEFAULT_CONFIG).unwrap();
    assert_eq!(outcome.solution_count, 1);
    let board = outcome.board.expect("a solution was found");
    assert_eq!(board.len(), 81);
    assert!(triadoku::solver::verify_board(&board).is_ok());
}

/// S2: an empty puzzle has 2 as the count for `limit=2`, with both SCC bits on.
#[test]
fn s2_empty_puzzle_with_limit_two() {
    let empty = ".".repeat(81);
    let outcome = solve(&empty, 2, DEFAULT_CONFIG).unwrap();
    assert_eq!(outcome.solution_count, 2);
    assert!(outcome.guesses > 0);
}

/// S3: two clues in the same box, same cell-adjacent slots, contradict.
#[test]
fn s3_contradictory_puzzle_has_no_solution() {
    let puzzle = format!("11{}", ".".repeat(79));
    assert_eq!(puzzle.len(), 81);
    let outcome = solve(&puzzle, 1, DEFAULT_CONFIG).unwrap();
    assert_eq!(outcome.solution_count, 0);
    assert!(outcome.board.is_none());
}

/// S4: a valid completed board fed back in has exactly one (itself) solution.
#[test]
fn s4_completed_board_is_its_own_unique_solution() {
    let board = "534678912672195348198342567859761423426853791713924856961537284287419635345286179";
    let outcome = solve(board, 2, DEFAULT_CONFIG).unwrap();
    assert_eq!(outcome.solution_count, 1);
    assert_eq!(outcome.board.as_deref(), Some(board));
}

/// S5: pencilmark encoding of an empty puzzle, with both inference bits on and off, agree on count.
#[test]
fn s5_pencilmark_empty_puzzle_agrees_with_classic_regardless_of_scc_bits() {
    // every byte is a non-'.' character, so every value is permitted in every cell.
    let pencilmark = "x".repeat(729);

    let with_bits = solve(&pencilmark, 1, DEFAULT_CONFIG).unwrap();
    let without_bits = solve(&pencilmark, 1, SolverConfig::empty()).unwrap();
    assert_eq!(with_bits.solution_count, without_bits.solution_count);
    assert_eq!(with_bits.solution_count, 1);
}

/// S6: parallel depth-1 split agrees in solution count with the sequential run.
#[test]
fn s6_parallel_split_matches_sequential_solution_count() {
    let puzzle = "..53.....8......2..7..1.5..4....53...1..7...6..32...8..6.5....9..4....3......97..";
    let sequential = solve(puzzle, 1, DEFAULT_CONFIG).unwrap();
    let parallel_config = DEFAULT_CONFIG | SolverConfig::PARALLEL_DEPTH1;
    let parallel = solve(puzzle, 1, parallel_config).unwrap();
    assert_eq!(sequential.solution_count, parallel.solution_count);
    assert!(parallel.guesses > 0);
}

/// Cross-configuration property restricted to the boundary case of an empty
/// board: differing only in inference/heuristic/backend bits must not change
/// the solution count for a fixed limit.
#[test]
fn configuration_bits_do_not_change_solution_count_on_empty_board() {
    let empty = ".".repeat(81);
    let baseline = solve(&empty, 2, SolverConfig::empty()).unwrap().solution_count;
    for config in [
        SolverConfig::SCC_INFERENCE,
        SolverConfig::SCC_HEURISTIC,
        SolverConfig::SCC_INFERENCE | SolverConfig::SCC_HEURISTIC,
        SolverConfig::SCC_INFERENCE | SolverConfig::CSR_BACKEND,
        SolverConfig::SCC_HEURISTIC | SolverConfig::CSR_BACKEND,
    ] {
        let got = solve(&empty, 2, config).unwrap().solution_count;
        assert_eq!(got, baseline, "config {:?} disagreed with baseline", config);
    }
}
