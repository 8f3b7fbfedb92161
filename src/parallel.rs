//! Crate `parallel` implements the depth-1 two-worker fork: the left branch
//! runs on a spawned thread against a cloned solver and cloned state, the
//! right branch runs on the calling thread against the calling solver.
//! Plain `std::thread::spawn` plus a join, no thread pool and no
//! work-stealing: only the very first branching decision is ever forked.
use std::sync::atomic::Ordering;
use std::thread;

use crate::bcp::assert_literal;
use crate::error::SolverError;
use crate::search::SearchStats;
use crate::solver::Solver;
use crate::state::State;
use crate::stats::SolverStats;
use crate::types::{Literal, LiteralEncoding};

/// `out` already has its first guess counted by the caller; this adds the
/// second (both sides of the fork are explored, so the forking node counts
/// twice) and then the two branches' own guesses.
pub fn branch_parallel(
    solver: &mut Solver,
    literal: Literal,
    state: &mut State,
    limit_remaining: u64,
    mut out: SearchStats,
) -> Result<SearchStats, SolverError> {
    out.guesses += 1;

    let mut left_solver = solver.clone_for_parallel();
    let mut left_state = state.clone();
    let handle = thread::spawn(move || -> Result<(SearchStats, bool, State, SolverStats), SolverError> {
        let outcome = if assert_literal(
            &left_solver.adjacency,
            &left_solver.clause_initial_free,
            &mut left_solver.implications,
            &mut left_state,
            literal,
            &mut left_solver.stats,
        ) {
            let stats = left_solver.count_solutions(&mut left_state, 1, false, limit_remaining)?;
            let wrote_first = stats.solutions > 0 && left_solver.wrote_first_solution.load(Ordering::Relaxed);
            (stats, wrote_first, left_solver.result, left_solver.stats)
        } else {
            (SearchStats::default(), false, left_solver.result, left_solver.stats)
        };
        Ok(outcome)
    });

    let mut right_stats = SearchStats::default();
    let mut right_state = state.clone();
    if assert_literal(
        &solver.adjacency,
        &solver.clause_initial_free,
        &mut solver.implications,
        &mut right_state,
        literal.negate(),
        &mut solver.stats,
    ) {
        right_stats = solver.count_solutions(&mut right_state, 1, false, limit_remaining)?;
    }

    let (left_stats, left_wrote_first, left_result, left_telemetry) =
        handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;

    out.solutions += left_stats.solutions + right_stats.solutions;
    out.guesses += left_stats.guesses + right_stats.guesses;
    solver.stats.merge(&left_telemetry);

    if left_wrote_first && !solver.wrote_first_solution.load(Ordering::Relaxed) {
        solver.result = left_result;
        solver.wrote_first_solution.store(true, Ordering::Relaxed);
    }

    if out.solutions >= limit_remaining {
        solver.stop.store(true, Ordering::Relaxed);
    }

    Ok(out)
}
