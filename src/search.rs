//! Crate `search` provides the clause-based branching fallback and the
//! per-call statistics record returned up the recursive search. The
//! recursive DPLL driver itself lives on [`Solver`](crate::solver::Solver),
//! since it needs mutable access to nearly every field the solver owns;
//! this module holds the piece of it that stands alone.
use crate::adjacency::{Adjacency, AdjacencyStore};
use crate::error::SolverError;
use crate::state::State;
use crate::types::{ClauseId, Literal, LiteralEncoding};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub solutions: u64,
    pub guesses: u64,
}

/// Among the 9-literal "exactly one value" cell clauses, picks the one
/// closest to its threshold and returns the first literal in it whose
/// negation is not yet asserted. Called only when the SCC heuristic has no
/// candidate (it is off, or the current component graph offered none).
pub fn choose_literal_by_clause(
    adjacency: &Adjacency,
    state: &State,
    positive_cell_clauses: &[ClauseId],
) -> Result<Literal, SolverError> {
    let mut min_free = u16::MAX;
    let mut which_clause = positive_cell_clauses[0];
    for &clause_id in positive_cell_clauses {
        let free = state.clause_free_literals[clause_id];
        if free < min_free {
            min_free = free;
            which_clause = clause_id;
        }
    }

    let mut chosen = None;
    adjacency.for_each_literal_in_clause(which_clause, |l| {
        if chosen.is_none() && !state.asserted.get(l.negate()) {
            chosen = Some(l);
        }
    });

    match chosen {
        Some(l) => Ok(l),
        None => {
            debug_assert!(false, "clause-based branching heuristic found no candidate literal");
            Err(SolverError::InvariantViolation(
                "clause-based branching heuristic found no un-negated literal in its chosen clause",
            ))
        }
    }
}
