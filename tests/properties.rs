//! Property-based checks layered on top of the scenario tests in
//! `solve_scenarios.rs`: the literal encoding's algebraic properties, and
//! the §8 cross-configuration invariant sampled over a handful of puzzles
//! rather than the full board space (solving is too expensive to shrink
//! over arbitrary 81-character strings).
use proptest::prelude::*;
use triadoku::solve;
use triadoku::types::{literal, LiteralEncoding, ELEMS_PER_BOX, NUM_BOXES, NUM_VALUES};
use triadoku::SolverConfig;

const PUZZLES: &[&str] = &[
    // empty board
    "..........................................................................75...",
    "..53.....8......2..7..1.5..4....53...1..7...6..32...8..6.5....9..4....3......97..",
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
];

prop_compose! {
    fn arb_coords()(box_id in 0..NUM_BOXES, elem in 0..ELEMS_PER_BOX, value in 0..NUM_VALUES) -> (usize, usize, usize) {
        (box_id, elem, value)
    }
}

proptest! {
    /// Negation is its own inverse for every valid (box, elem, value) triple.
    #[test]
    fn negation_is_an_involution((box_id, elem, value) in arb_coords()) {
        let l = literal(box_id, elem, value);
        prop_assert_eq!(l, l.negate().negate());
    }

    /// Negation always flips polarity and never changes the decoded coordinates.
    #[test]
    fn negation_flips_polarity_only((box_id, elem, value) in arb_coords()) {
        let l = literal(box_id, elem, value);
        prop_assert_ne!(l.is_positive(), l.negate().is_positive());
        prop_assert_eq!(l.coords(), l.negate().coords());
    }

    /// A puzzle's solution count must not depend on which inference,
    /// heuristic, or backend bits are set -- only `PARALLEL_DEPTH1`'s result
    /// ordering may vary, never the count.
    #[test]
    fn solution_count_is_independent_of_config_bits(
        puzzle_idx in 0..PUZZLES.len(),
        inference in any::<bool>(),
        heuristic in any::<bool>(),
        csr in any::<bool>(),
    ) {
        let puzzle = PUZZLES[puzzle_idx];
        let mut config = SolverConfig::empty();
        config.set(SolverConfig::SCC_INFERENCE, inference);
        config.set(SolverConfig::SCC_HEURISTIC, heuristic);
        config.set(SolverConfig::CSR_BACKEND, csr);

        let baseline = solve(puzzle, 2, SolverConfig::empty()).unwrap().solution_count;
        let got = solve(puzzle, 2, config).unwrap().solution_count;
        prop_assert_eq!(got, baseline);
    }
}
