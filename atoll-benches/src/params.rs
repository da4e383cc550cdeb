//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that Criterion
//! benchmark ids stay readable across runs.

use std::fmt;

/// Parameters for a churn benchmark run.
#[derive(Clone, Debug)]
pub struct ChurnBenchParams {
    /// Number of nodes registered before edits begin.
    pub node_count: usize,
    /// Total scripted edit operations.
    pub op_count: usize,
}

impl fmt::Display for ChurnBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},ops={}", self.node_count, self.op_count)
    }
}
