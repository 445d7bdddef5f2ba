//! Seeded benchmark inputs.
//!
//! Inputs are generated once per benchmark group from [`SEED`] so runs stay
//! comparable across machines.

use confmodel_core::{
    AdjacencyList, DegreeSequence, MatchingParams, degree_random_regular_network,
    sample_powerlaw_with_natural_cutoff,
};
use rand::{SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Seed used for all benchmark inputs.
pub const SEED: u64 = 42;

/// Returns a generator seeded with [`SEED`].
#[must_use]
pub fn bench_rng() -> SmallRng {
    SmallRng::seed_from_u64(SEED)
}

/// Samples a power-law degree sequence and bumps the first degree when the
/// sum is odd so the sequence is always matchable.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when the sampler rejects `gamma` or
/// `k_min`.
pub fn even_powerlaw_sequence(
    nodes: usize,
    gamma: f64,
    k_min: usize,
) -> Result<DegreeSequence, BenchSetupError> {
    let mut rng = bench_rng();
    let sampled = sample_powerlaw_with_natural_cutoff(&mut rng, gamma, nodes, k_min)?;
    if sampled.has_even_sum() {
        return Ok(sampled);
    }
    let mut degrees = sampled.into_vec();
    if let Some(first) = degrees.first_mut() {
        *first += 1;
    }
    Ok(DegreeSequence::new(degrees))
}

/// Generates a random regular graph for connectivity benchmarks.
///
/// # Errors
/// Returns [`BenchSetupError::Graph`] when `nodes * degree` is odd and
/// [`BenchSetupError::Unrealised`] when matching fails within the default
/// budget.
pub fn regular_graph(nodes: usize, degree: usize) -> Result<AdjacencyList, BenchSetupError> {
    let mut rng = bench_rng();
    let graph = degree_random_regular_network(&mut rng, nodes, degree, &MatchingParams::default())?;
    if graph.is_empty() {
        return Err(BenchSetupError::Unrealised {
            context: "regular connectivity input",
        });
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(100, 2.5, 2)]
    #[case(257, 3.0, 1)]
    fn powerlaw_fixture_has_even_sum(
        #[case] nodes: usize,
        #[case] gamma: f64,
        #[case] k_min: usize,
    ) {
        let degrees = even_powerlaw_sequence(nodes, gamma, k_min).expect("parameters are valid");
        assert_eq!(degrees.len(), nodes);
        assert!(degrees.has_even_sum());
    }

    #[rstest]
    fn regular_fixture_rejects_odd_stub_counts() {
        let err = regular_graph(5, 3).expect_err("5 * 3 is odd");
        assert!(matches!(err, BenchSetupError::Graph(_)));
    }
}
