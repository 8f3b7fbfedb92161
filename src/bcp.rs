//! Crate `bcp` implements boolean constraint propagation: `assert_literal`
//! and the on-the-fly derivation of binary implications once a clause's
//! free-literal count bottoms out.
use crate::adjacency::{Adjacency, AdjacencyStore};
use crate::implications::ImplicationStore;
use crate::state::State;
use crate::stats::SolverStats;
use crate::types::{ClauseId, Literal, LiteralEncoding};

/// `Assert(l, s)`: returns `true` if `l` could be made true in `state`
/// without contradiction, `false` on conflict. On `false` the state is left
/// partially modified and must be discarded by the caller — callers always
/// operate on a fresh copy, never on the last-known-good state.
pub fn assert_literal(
    adjacency: &Adjacency,
    clause_initial_free: &[u16],
    implications: &mut ImplicationStore,
    state: &mut State,
    literal: Literal,
    stats: &mut SolverStats,
) -> bool {
    if state.asserted.get(literal) {
        return true;
    }
    if state.asserted.get(literal.negate()) {
        return false;
    }

    stats.bcp_steps += 1;
    state.asserted.set(literal);
    state.num_asserted += 1;

    let mut triggered = Vec::new();
    adjacency.for_each_clause_of_not_literal(literal, |clause_id| {
        // Wrapping, not checked: a clause can be driven past its floor once
        // more of its literals get negated after it already hit zero, and
        // only the zero crossing (not the magnitude below it) is meaningful.
        let free = &mut state.clause_free_literals[clause_id];
        *free = free.wrapping_sub(1);
        if *free == 0 {
            triggered.push(clause_id);
        }
    });
    for clause_id in triggered {
        materialize_binaries(adjacency, clause_initial_free, implications, state, clause_id, stats);
    }

    let count = state.implication_counts[literal as usize];
    for i in 0..count {
        let implied = implications.get(literal, count)[i as usize];
        if !assert_literal(adjacency, clause_initial_free, implications, state, implied, stats) {
            return false;
        }
    }
    true
}

/// `MaterializeBinaries(c)`: once a clause's free-literal counter bottoms
/// out, exactly `min(c) + 1` of its literals remain un-negated (this is the
/// invariant, not a recomputation — the clause's *initial* free-literal
/// count, not the current one, is what recovers `min(c)+1` here). At most
/// one of those survivors may end up false, so every ordered pair of
/// survivors gets a "negation of one implies the other" binary implication.
fn materialize_binaries(
    adjacency: &Adjacency,
    clause_initial_free: &[u16],
    implications: &mut ImplicationStore,
    state: &mut State,
    clause: ClauseId,
    stats: &mut SolverStats,
) {
    let mut survivors = Vec::with_capacity(clause_initial_free[clause] as usize + 1);
    adjacency.for_each_literal_in_clause(clause, |l| {
        if !state.asserted.get(l.negate()) {
            survivors.push(l);
        }
    });

    for i in 0..survivors.len() {
        for j in 0..survivors.len() {
            if i == j {
                continue;
            }
            push_implication(implications, state, survivors[i].negate(), survivors[j]);
            stats.implications += 1;
        }
    }
}

fn push_implication(implications: &mut ImplicationStore, state: &mut State, from: Literal, to: Literal) {
    let len = state.implication_counts[from as usize];
    implications.push(from, len, to);
    state.implication_counts[from as usize] += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::types::literal;

    #[test]
    fn asserting_a_literal_twice_is_a_no_op_success() {
        let built = constraints::build(false);
        let mut implications = built.implications.clone();
        let mut state = built.initial_state.clone();
        let mut stats = SolverStats::default();
        let l = literal(0, 0, 0);
        assert!(assert_literal(&built.adjacency, &built.clause_initial_free, &mut implications, &mut state, l, &mut stats));
        let asserted_before = state.num_asserted;
        assert!(assert_literal(&built.adjacency, &built.clause_initial_free, &mut implications, &mut state, l, &mut stats));
        assert_eq!(state.num_asserted, asserted_before);
    }

    #[test]
    fn asserting_a_literal_and_its_negation_conflicts() {
        let built = constraints::build(false);
        let mut implications = built.implications.clone();
        let mut state = built.initial_state.clone();
        let mut stats = SolverStats::default();
        let l = literal(0, 0, 0);
        assert!(assert_literal(&built.adjacency, &built.clause_initial_free, &mut implications, &mut state, l, &mut stats));
        assert!(!assert_literal(&built.adjacency, &built.clause_initial_free, &mut implications, &mut state, l.negate(), &mut stats));
    }

    #[test]
    fn asserting_one_cell_value_rules_out_the_other_eight_in_the_cell() {
        let built = constraints::build(false);
        let mut implications = built.implications.clone();
        let mut state = built.initial_state.clone();
        let mut stats = SolverStats::default();
        let l = literal(0, 0, 3);
        assert!(assert_literal(&built.adjacency, &built.clause_initial_free, &mut implications, &mut state, l, &mut stats));
        for v in 0..9 {
            if v == 3 {
                continue;
            }
            let other = literal(0, 0, v);
            assert!(state.asserted.get(other.negate()), "value {} in cell should be ruled out", v);
        }
    }
}
