//! Crate `scc` implements the path-based strongly-connected-component pass
//! over the binary implication graph, including the inference rule and the
//! branch-candidate selection.
use crate::adjacency::{Adjacency, AdjacencyStore};
use crate::bcp::assert_literal;
use crate::implications::ImplicationStore;
use crate::state::State;
use crate::stats::SolverStats;
use crate::types::{Literal, LiteralEncoding, NUM_LITERALS};

/// Reusable scratch space for one or more SCC passes over the same puzzle.
/// `reset` is called at the start of every
/// [`find_strongly_connected_components`](SccEngine::find_strongly_connected_components)
/// call, so the engine itself carries no state across unrelated searches.
pub struct SccEngine {
    preorder_counter: i32,
    preorder_index: Vec<i32>,
    stack_p: Vec<Literal>,
    stack_s: Vec<Literal>,
    literal_to_component_id: Vec<i32>,
    next_component_id: i32,
    /// The largest eligible component's literal from the most recent pass,
    /// i.e. the SCC-heuristic branch candidate.
    pub best_component_literal: Option<Literal>,
    best_component_size: i32,
}

impl SccEngine {
    pub fn new() -> SccEngine {
        SccEngine {
            preorder_counter: 0,
            preorder_index: vec![-1; NUM_LITERALS],
            stack_p: Vec::new(),
            stack_s: Vec::new(),
            literal_to_component_id: vec![-1; NUM_LITERALS],
            next_component_id: 0,
            best_component_literal: None,
            best_component_size: -1,
        }
    }

    fn reset(&mut self) {
        self.preorder_counter = 0;
        self.preorder_index.iter_mut().for_each(|p| *p = -1);
        self.stack_p.clear();
        self.stack_s.clear();
        self.literal_to_component_id.iter_mut().for_each(|c| *c = -1);
        self.next_component_id = 0;
        self.best_component_literal = None;
        self.best_component_size = -1;
    }

    /// Returns `false` on conflict (an assertion forced by the inference
    /// rule failed); the state should then be treated as a dead branch.
    #[allow(clippy::too_many_arguments)]
    pub fn find_strongly_connected_components(
        &mut self,
        adjacency: &Adjacency,
        clause_initial_free: &[u16],
        implications: &mut ImplicationStore,
        state: &mut State,
        stats: &mut SolverStats,
        inference_enabled: bool,
    ) -> bool {
        self.reset();
        stats.scc_runs += 1;

        let mut literal = 0u32;
        while (literal as usize) < NUM_LITERALS {
            if self.preorder_index[literal as usize] == -1
                && literal.is_valid()
                && !state.asserted.pos_or_neg(literal)
                && !self.visit(adjacency, clause_initial_free, implications, state, stats, inference_enabled, literal)
            {
                return false;
            }
            literal += 2;
        }
        true
    }

    #[allow(clippy::too_many_arguments)]
    fn visit(
        &mut self,
        adjacency: &Adjacency,
        clause_initial_free: &[u16],
        implications: &mut ImplicationStore,
        state: &mut State,
        stats: &mut SolverStats,
        inference_enabled: bool,
        literal: Literal,
    ) -> bool {
        if inference_enabled {
            let target = self.preorder_index[literal.negate() as usize];
            let mut common_ancestor = None;
            for &ancestor in &self.stack_p {
                if self.preorder_index[ancestor as usize] <= target {
                    common_ancestor = Some(ancestor);
                } else {
                    break;
                }
            }
            if let Some(ancestor) = common_ancestor {
                // `ancestor` reaches both `literal` (now) and `¬literal` (earlier,
                // smaller preorder index), so `ancestor` implies both polarities
                // and must itself be false.
                if !assert_literal(adjacency, clause_initial_free, implications, state, ancestor.negate(), stats) {
                    return false;
                }
                if state.asserted.get(literal) {
                    return true;
                }
            }
        }

        self.preorder_index[literal as usize] = self.preorder_counter;
        self.preorder_counter += 1;
        self.stack_p.push(literal);
        self.stack_s.push(literal);

        // Re-reads `state.implication_counts[literal]` on every iteration
        // rather than snapshotting it up front: the inference-rule `Assert`
        // above can materialize and append new binaries onto `literal`'s own
        // list while this loop is still running (a later survivor-pairing
        // can target a literal already on the path), and those need to be
        // walked in the same pass, not missed.
        let mut i: u16 = 0;
        loop {
            let count = state.implication_counts[literal as usize];
            if i >= count {
                break;
            }
            let implied = implications.get(literal, count)[i as usize];
            i += 1;

            if state.asserted.get(implied) {
                // Already-asserted implications correspond to subsumed binary
                // clauses and have no effect on inference.
                continue;
            } else if self.preorder_index[implied as usize] == -1 {
                if !self.visit(adjacency, clause_initial_free, implications, state, stats, inference_enabled, implied) {
                    return false;
                }
                if inference_enabled && state.asserted.pos_or_neg(literal) {
                    break;
                }
            } else if self.literal_to_component_id[implied as usize] == -1 {
                while self.preorder_index[*self.stack_p.last().expect("stack_p nonempty while visiting") as usize]
                    > self.preorder_index[implied as usize]
                {
                    self.stack_p.pop();
                }
            }
        }

        if Some(&literal) == self.stack_p.last() {
            self.stack_p.pop();
            let component_size = self.stack_s.iter().rev().position(|&l| l == literal).expect("literal on stack_s") + 1;
            if !state.asserted.pos_or_neg(literal) {
                let negation_has_component = self.literal_to_component_id[literal.negate() as usize] >= 0;
                let start = self.stack_s.len() - component_size;
                for slot in &self.stack_s[start..] {
                    self.literal_to_component_id[*slot as usize] = self.next_component_id;
                }
                // If the negation already has a component it is topologically at
                // least as informative, so prefer it and skip this one.
                if !negation_has_component && component_size as i32 > self.best_component_size {
                    self.best_component_size = component_size as i32;
                    self.best_component_literal = Some(literal);
                }
                self.next_component_id += 1;
            }
            self.stack_s.truncate(self.stack_s.len() - component_size);
        }
        true
    }
}

impl Default for SccEngine {
    fn default() -> SccEngine {
        SccEngine::new()
    }
}
