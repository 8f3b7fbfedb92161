/*!
# triadoku

A DPLL-style Sudoku solver over a triad-encoded Boolean constraint model,
with boolean constraint propagation, a path-based strongly-connected-
component engine that doubles as both an inference rule and a branching
heuristic, and an optional depth-1 parallel split.

The encoding augments the usual "one value per cell" clauses with per-box
*triad* auxiliary variables, so that large swaths of a board resolve purely
through propagation and SCC inference before any branching decision is
needed. Two interchangeable adjacency backends (nested-vector and CSR) sit
behind the same capability interface, selected through [`SolverConfig`].

## Usage

```
use triadoku::{solve, SolverConfig};

let empty = ".".repeat(81);
let outcome = solve(&empty, 1, SolverConfig::SCC_INFERENCE | SolverConfig::SCC_HEURISTIC).unwrap();
assert_eq!(outcome.solution_count, 1);
assert!(outcome.board.is_some());
```
*/
/// Crate `types` provides the literal encoding and box/elem/value addressing.
pub mod types;
/// Crate `bitset` provides a fixed-width bit vector over literal ids.
pub mod bitset;
/// Crate `adjacency` provides the clause/literal adjacency backends.
pub mod adjacency;
/// Crate `implications` owns the per-literal binary implication arena.
pub mod implications;
/// Crate `constraints` builds the static constraint set once, up front.
pub mod constraints;
/// Crate `state` is the mutable search node.
pub mod state;
/// Crate `bcp` implements boolean constraint propagation.
pub mod bcp;
/// Crate `scc` implements the path-based SCC engine and its inference rule.
pub mod scc;
/// Crate `search` provides the clause-based branching fallback.
pub mod search;
/// Crate `parallel` implements the depth-1 two-worker fork.
pub mod parallel;
/// Crate `solver` provides the top-level API as a Sudoku solver.
pub mod solver;
/// Crate `puzzle` translates puzzle strings to and from internal literals.
pub mod puzzle;
/// Crate `config` provides the solver's configuration bit mask.
pub mod config;
/// Crate `error` provides the boundary error type.
pub mod error;
/// Crate `stats` provides per-solver telemetry counters.
pub mod stats;
/// Crate `validator` implements a model checker for a completed board.
pub mod validator;

pub use config::SolverConfig;
pub use error::SolverError;
pub use solver::{solve, Solver, SolveOutcome};

#[macro_use]
extern crate bitflags;
