//! Per-solver telemetry, kept as an ordinary per-`Solver` field rather than
//! a global `thread_local`: nothing here feeds back into search or
//! correctness, and a per-instance counter is plainer to reason about and
//! to merge across the depth-1 parallel split.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub guesses: u64,
    pub bcp_steps: u64,
    pub implications: u64,
    pub scc_runs: u64,
}

impl SolverStats {
    pub fn merge(&mut self, other: &SolverStats) {
        self.guesses += other.guesses;
        self.bcp_steps += other.bcp_steps;
        self.implications += other.implications;
        self.scc_runs += other.scc_runs;
    }
}
