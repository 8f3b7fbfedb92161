//! Crate `constraints` builds the static adjacency, the initial binary
//! implication graph, and the initial [`State`] once, up front, by walking
//! the box/triad/band structure and emitting one `ExactlyN` constraint per
//! group.
use crate::adjacency::Adjacency;
use crate::implications::ImplicationStore;
use crate::state::State;
use crate::types::{literal, ClauseId, Literal, LiteralEncoding, NUM_BOXES, NUM_VALUES, SLACK_ELEM};

pub struct BuiltConstraints {
    pub adjacency: Adjacency,
    pub clause_initial_free: Vec<u16>,
    pub positive_cell_clauses: Vec<ClauseId>,
    pub implications: ImplicationStore,
    pub initial_state: State,
}

struct Builder {
    clauses_to_literals: Vec<Vec<Literal>>,
    literals_to_clauses: Vec<Vec<ClauseId>>,
    clause_initial_free: Vec<u16>,
    positive_cell_clauses: Vec<ClauseId>,
    implications: ImplicationStore,
    initial_counts: Vec<u16>,
}

impl Builder {
    fn new() -> Builder {
        Builder {
            clauses_to_literals: Vec::new(),
            literals_to_clauses: vec![Vec::new(); crate::types::NUM_LITERALS],
            clause_initial_free: Vec::new(),
            positive_cell_clauses: Vec::new(),
            implications: ImplicationStore::new(),
            initial_counts: vec![0u16; crate::types::NUM_LITERALS],
        }
    }

    fn add_clause_with_minimum(&mut self, literals: &[Literal], min: usize) -> ClauseId {
        let id = self.clauses_to_literals.len();
        for &l in literals {
            self.literals_to_clauses[l as usize].push(id);
        }
        self.clauses_to_literals.push(literals.to_vec());
        self.clause_initial_free.push((literals.len() - 1 - min) as u16);
        if min == 1 && literals.len() == 9 {
            self.positive_cell_clauses.push(id);
        }
        id
    }

    fn add_implication(&mut self, from: Literal, to: Literal) {
        let len = self.initial_counts[from as usize];
        self.implications.push(from, len, to);
        self.initial_counts[from as usize] += 1;
    }

    /// "Exactly n of `literals` are true." For `n == 1` this also derives
    /// every pairwise mutual-exclusion implication directly, since a single
    /// clause alone under-constrains a 1-of-N group for BCP purposes. For
    /// `n > 1` the pairwise implications are left to be discovered lazily by
    /// `bcp::materialize_binaries` once the clause's free-literal count
    /// bottoms out.
    fn add_exactly_n(&mut self, literals: &[Literal], n: usize) {
        self.add_clause_with_minimum(literals, n);
        if n == 1 {
            for i in 0..literals.len() - 1 {
                for j in i + 1..literals.len() {
                    self.add_implication(literals[i], literals[j].negate());
                    self.add_implication(literals[j], literals[i].negate());
                }
            }
        } else {
            let negations: Vec<Literal> = literals.iter().map(|&l| l.negate()).collect();
            self.add_clause_with_minimum(&negations, literals.len() - n);
        }
    }
}

pub fn build(use_csr: bool) -> BuiltConstraints {
    let mut b = Builder::new();

    for box_id in 0..NUM_BOXES {
        // ExactlyOne for the 9 cells, ExactlyThree for the 6 triads.
        for elem in 0..SLACK_ELEM {
            let lits: Vec<Literal> = (0..NUM_VALUES).map(|v| literal(box_id, elem, v)).collect();
            let (row, col) = (elem / 4, elem % 4);
            if row < 3 && col < 3 {
                b.add_exactly_n(&lits, 1);
            } else {
                b.add_exactly_n(&lits, 3);
            }
        }

        // Triad-defining constraints.
        for value in 0..NUM_VALUES {
            for i in 0..3 {
                let mut h_triad = Vec::with_capacity(4);
                let mut v_triad = Vec::with_capacity(4);
                for j in 0..3 {
                    h_triad.push(literal(box_id, i * 4 + j, value));
                    v_triad.push(literal(box_id, i + j * 4, value));
                }
                h_triad.push(literal(box_id, i * 4 + 3, value).negate());
                v_triad.push(literal(box_id, i + 12, value).negate());
                b.add_exactly_n(&h_triad, 1);
                b.add_exactly_n(&v_triad, 1);
            }
        }
    }

    // Band-level constraints binding within-box and across-box triads.
    for value in 0..NUM_VALUES {
        for band in 0..3 {
            for i in 0..3 {
                let mut h_within = Vec::with_capacity(3);
                let mut h_across = Vec::with_capacity(3);
                let mut v_within = Vec::with_capacity(3);
                let mut v_across = Vec::with_capacity(3);
                for j in 0..3 {
                    h_within.push(literal(band * 3 + i, j * 4 + 3, value));
                    h_across.push(literal(band * 3 + j, i * 4 + 3, value));
                    v_within.push(literal(i * 3 + band, j + 12, value));
                    v_across.push(literal(j * 3 + band, i + 12, value));
                }
                b.add_exactly_n(&h_within, 1);
                b.add_exactly_n(&h_across, 1);
                b.add_exactly_n(&v_within, 1);
                b.add_exactly_n(&v_across, 1);
            }
        }
    }

    let adjacency = Adjacency::build(use_csr, &b.clauses_to_literals, &b.literals_to_clauses);

    let mut initial_state = State::new(b.clauses_to_literals.len());
    initial_state.clause_free_literals = b.clause_initial_free.clone();
    initial_state.implication_counts = b.initial_counts;

    BuiltConstraints {
        adjacency,
        clause_initial_free: b.clause_initial_free,
        positive_cell_clauses: b.positive_cell_clauses,
        implications: b.implications,
        initial_state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyStore;

    #[test]
    fn every_clause_has_at_least_one_free_literal_to_start() {
        let built = build(false);
        for &free in &built.clause_initial_free {
            assert!(free >= 1);
        }
    }

    #[test]
    fn nine_positive_cell_clauses_per_box() {
        let built = build(false);
        // 9 cell clauses + 6 triad clauses per box, all with 9 literals and min in {1, 3}
        // but only the 81 ExactlyOne cell clauses (min == 1, 9 literals) register.
        assert_eq!(built.positive_cell_clauses.len(), NUM_BOXES * 9);
    }

    #[test]
    fn every_valid_literal_participates_in_at_least_one_clause() {
        let built = build(false);
        for box_id in 0..NUM_BOXES {
            for elem in 0..SLACK_ELEM {
                for value in 0..NUM_VALUES {
                    let l = literal(box_id, elem, value);
                    let mut count = 0;
                    built.adjacency.for_each_clause_of_not_literal(l.negate(), |_| count += 1);
                    assert!(count > 0, "literal {:?} has no clauses", l);
                }
            }
        }
    }
}
