//! Crate `solver` provides the top-level API: [`Solver`] bundles the static
//! constraint data with the mutable search-wide bookkeeping (telemetry,
//! termination atomics, captured result) and drives the recursive DPLL
//! search.
use std::sync::atomic::{AtomicBool, Ordering};

use crate::adjacency::{Adjacency, AdjacencyStore};
use crate::bcp::assert_literal;
use crate::config::SolverConfig;
use crate::constraints;
use crate::error::SolverError;
use crate::implications::ImplicationStore;
use crate::puzzle;
use crate::scc::SccEngine;
use crate::search::{self, SearchStats};
use crate::state::State;
use crate::stats::SolverStats;
use crate::types::{ClauseId, Literal, ALL_ASSERTED};
use crate::{parallel, validator};

/// The owned result of a [`Solver::solve`] call, replacing the four
/// out-parameters of the C-shaped `Solve(puzzle, limit, configuration,
/// out_solution, out_guesses) -> solution_count` contract with one value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveOutcome {
    pub solution_count: usize,
    /// The first captured solution's board, in the same 81-character digit
    /// encoding `solve` accepts, if at least one solution was found.
    pub board: Option<String>,
    pub guesses: u64,
}

pub struct Solver {
    pub(crate) adjacency: Adjacency,
    pub(crate) clause_initial_free: Vec<u16>,
    positive_cell_clauses: Vec<ClauseId>,
    pub(crate) implications: ImplicationStore,
    initial_state: State,
    scc: SccEngine,
    config: SolverConfig,

    pub(crate) stop: AtomicBool,
    pub(crate) wrote_first_solution: AtomicBool,

    pub(crate) stats: SolverStats,
    pub(crate) result: State,
}

impl Solver {
    /// Builds the static adjacency and initial implication graph once. The
    /// adjacency backend (nested-vector vs CSR) is baked in here rather than
    /// re-chosen per `solve` call, since §4.6's adjacency is "static after
    /// setup."
    pub fn new(config: SolverConfig) -> Solver {
        let built = constraints::build(config.wants_csr_backend());
        log::debug!(
            "built constraints: {} clauses, {} positive cell clauses",
            built.adjacency.num_clauses(),
            built.positive_cell_clauses.len()
        );
        let result = built.initial_state.clone();
        Solver {
            adjacency: built.adjacency,
            clause_initial_free: built.clause_initial_free,
            positive_cell_clauses: built.positive_cell_clauses,
            implications: built.implications,
            initial_state: built.initial_state,
            scc: SccEngine::new(),
            config,
            stop: AtomicBool::new(false),
            wrote_first_solution: AtomicBool::new(false),
            stats: SolverStats::default(),
            result,
        }
    }

    /// Deep-clones everything the left depth-1 worker needs to append to
    /// independently (the implication arena above all), and freshly
    /// initializes the atomics and counters rather than sharing them —
    /// grounded on `CloneForParallel`, which does the same.
    pub(crate) fn clone_for_parallel(&self) -> Solver {
        Solver {
            adjacency: self.adjacency.clone(),
            clause_initial_free: self.clause_initial_free.clone(),
            positive_cell_clauses: self.positive_cell_clauses.clone(),
            implications: self.implications.clone(),
            initial_state: self.initial_state.clone(),
            scc: SccEngine::new(),
            config: self.config,
            stop: AtomicBool::new(false),
            wrote_first_solution: AtomicBool::new(false),
            stats: SolverStats::default(),
            result: self.initial_state.clone(),
        }
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    /// `Solve(puzzle, limit, configuration, out_solution, out_guesses) ->
    /// solution_count`, reshaped into one owned [`SolveOutcome`].
    pub fn solve(&mut self, puzzle: &str, limit: usize, config: SolverConfig) -> Result<SolveOutcome, SolverError> {
        log::trace!("solve entry: limit={}, config={:?}", limit, config);
        self.config = config;
        self.stats = SolverStats::default();
        self.stop.store(false, Ordering::Relaxed);
        self.wrote_first_solution.store(false, Ordering::Relaxed);
        self.result = self.initial_state.clone();

        let mut state = self.initial_state.clone();
        if !puzzle::seed_puzzle(puzzle, &mut |literal| {
            assert_literal(
                &self.adjacency,
                &self.clause_initial_free,
                &mut self.implications,
                &mut state,
                literal,
                &mut self.stats,
            )
        })? {
            log::trace!("solve exit: puzzle is initially inconsistent");
            return Ok(SolveOutcome {
                solution_count: 0,
                board: None,
                guesses: 0,
            });
        }

        let limit_remaining = limit as u64;
        let parallel_first_split = config.contains(SolverConfig::PARALLEL_DEPTH1);
        let got = self.count_solutions(&mut state, 0, parallel_first_split, limit_remaining)?;

        let board = if self.wrote_first_solution.load(Ordering::Relaxed) {
            Some(puzzle::decode_board(&self.result))
        } else {
            None
        };
        log::trace!("solve exit: {} solution(s), {} guesses", got.solutions, got.guesses);
        // Sequential recursion already never overshoots `limit` (each branch's
        // budget is the remainder of the parent's), but the depth-1 parallel
        // split hands both workers the *same* undivided budget since they run
        // concurrently -- see `parallel::branch_parallel`. Capping here keeps
        // `solution_count` honoring "capped at limit" regardless of which side
        // observes the shared stop flag first.
        Ok(SolveOutcome {
            solution_count: (got.solutions as usize).min(limit),
            board,
            guesses: got.guesses,
        })
    }

    /// `CountSolutionsConsistentWithPartialAssignment`.
    pub(crate) fn count_solutions(
        &mut self,
        state: &mut State,
        depth: usize,
        parallel_first_split: bool,
        limit_remaining: u64,
    ) -> Result<SearchStats, SolverError> {
        let mut out = SearchStats::default();
        if limit_remaining == 0 || self.stop.load(Ordering::Relaxed) {
            return Ok(out);
        }

        let scc_enabled = self.config.intersects(SolverConfig::SCC_HEURISTIC | SolverConfig::SCC_INFERENCE);
        if scc_enabled {
            while state.num_asserted < ALL_ASSERTED {
                let prev_asserted = state.num_asserted;
                let consistent = self.scc.find_strongly_connected_components(
                    &self.adjacency,
                    &self.clause_initial_free,
                    &mut self.implications,
                    state,
                    &mut self.stats,
                    self.config.contains(SolverConfig::SCC_INFERENCE),
                );
                if !consistent {
                    return Ok(out);
                }
                if prev_asserted == state.num_asserted {
                    break;
                }
            }
        }

        if state.is_solved() {
            out.solutions = 1;
            if self
                .wrote_first_solution
                .compare_exchange(false, true, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                self.result = state.clone();
            }
            if out.solutions >= limit_remaining {
                self.stop.store(true, Ordering::Relaxed);
            }
            return Ok(out);
        }

        let branch_literal = if self.config.contains(SolverConfig::SCC_HEURISTIC) && self.scc.best_component_literal.is_some()
        {
            self.scc.best_component_literal.unwrap()
        } else {
            search::choose_literal_by_clause(&self.adjacency, state, &self.positive_cell_clauses)?
        };

        let got = self.branch_on_literal(branch_literal, state, depth, parallel_first_split, limit_remaining)?;
        if got.solutions >= limit_remaining {
            self.stop.store(true, Ordering::Relaxed);
        }
        Ok(got)
    }

    fn branch_on_literal(
        &mut self,
        literal: Literal,
        state: &mut State,
        depth: usize,
        parallel_first_split: bool,
        limit_remaining: u64,
    ) -> Result<SearchStats, SolverError> {
        use crate::types::LiteralEncoding;

        let mut out = SearchStats::default();
        if self.stop.load(Ordering::Relaxed) || limit_remaining == 0 {
            return Ok(out);
        }
        out.guesses += 1;

        if parallel_first_split && depth == 0 {
            return parallel::branch_parallel(self, literal, state, limit_remaining, out);
        }

        let mut left = state.clone();
        if assert_literal(
            &self.adjacency,
            &self.clause_initial_free,
            &mut self.implications,
            &mut left,
            literal,
            &mut self.stats,
        ) {
            let got = self.count_solutions(&mut left, depth + 1, false, limit_remaining)?;
            out.solutions += got.solutions;
            out.guesses += got.guesses;
            if out.solutions >= limit_remaining {
                return Ok(out);
            }
        }

        if assert_literal(
            &self.adjacency,
            &self.clause_initial_free,
            &mut self.implications,
            state,
            literal.negate(),
            &mut self.stats,
        ) {
            let got = self.count_solutions(state, depth + 1, false, limit_remaining - out.solutions)?;
            out.solutions += got.solutions;
            out.guesses += got.guesses;
        }

        Ok(out)
    }
}

/// Free-function entry point, constructing a fresh [`Solver`] per call —
/// matching the original `Solve(puzzle, limit, configuration, ...)`
/// single-entry-point contract while `Solver::new`/`Solver::solve` stay
/// available for callers who want to reuse the built constraint set across
/// several puzzles.
pub fn solve(puzzle: &str, limit: usize, config: SolverConfig) -> Result<SolveOutcome, SolverError> {
    Solver::new(config).solve(puzzle, limit, config)
}

/// Checks a completed board's solution against the full set of row/column/
/// box/triad invariants, independent of the search that produced it.
pub fn verify_board(board: &str) -> Result<(), validator::BoardError> {
    validator::validate(board)
}
