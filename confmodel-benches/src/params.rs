//! Benchmark parameter labels.
//!
//! Each type renders as the Criterion parameter string for one run.

use std::fmt;

/// Parameters for a regular-graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct RegularBenchParams {
    /// Number of nodes.
    pub nodes: usize,
    /// Degree of every node.
    pub degree: usize,
}

impl fmt::Display for RegularBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.nodes, self.degree)
    }
}

/// Parameters for a scale-free benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ScaleFreeBenchParams {
    /// Number of nodes.
    pub nodes: usize,
    /// Power-law exponent.
    pub gamma: f64,
    /// Minimum degree.
    pub k_min: usize,
}

impl fmt::Display for ScaleFreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},gamma={},kmin={}", self.nodes, self.gamma, self.k_min)
    }
}
