//! Topology builders composed from the sampler and the generator.

use rand::Rng;
use tracing::{debug, instrument, warn};

use crate::{
    configuration::configuration_model,
    degree::sample_powerlaw_with_natural_cutoff,
    error::Result,
    graph::{AdjacencyList, DegreeSequence},
    params::{MatchingParams, ScaleFreeParams},
};

/// Builds a random `k`-regular graph on `nodes` nodes.
///
/// Returns an empty list when matching fails within the budget, which is
/// certain when `k >= nodes`.
///
/// # Errors
/// Returns [`crate::GraphError::OddDegreeSum`] when `nodes * k` is odd.
///
/// # Examples
/// ```
/// use confmodel_core::{MatchingParams, degree_random_regular_network};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graph = degree_random_regular_network(&mut rng, 10, 3, &MatchingParams::default())?;
/// if !graph.is_empty() {
///     assert_eq!(graph.len(), 15);
///     assert!(graph.degrees(10).iter().all(|&degree| degree == 3));
/// }
/// # Ok::<(), confmodel_core::GraphError>(())
/// ```
#[instrument(name = "graph.regular_network", err, skip(rng, params))]
pub fn degree_random_regular_network<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    k: usize,
    params: &MatchingParams,
) -> Result<AdjacencyList> {
    let degrees = DegreeSequence::regular(nodes, k);
    configuration_model(rng, degrees.as_slice(), params)
}

/// Builds a scale-free graph whose degrees follow a truncated power law.
///
/// Each of up to `params.max_random()` rounds draws a fresh degree sequence
/// and hands it to [`configuration_model`]. The first realised graph is
/// returned. A sequence with an odd sum cannot be realised and is redrawn.
/// When every round fails the result is an empty list.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidExponent`] or
/// [`crate::GraphError::InvalidMinDegree`] when the sampler rejects the
/// parameters. [`ScaleFreeParams::new`] already validates both, so this only
/// surfaces for parameters built elsewhere.
///
/// # Examples
/// ```
/// use confmodel_core::{ScaleFreeParams, scale_free_network};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let params = ScaleFreeParams::new(2.5, 2)?;
/// let graph = scale_free_network(&mut rng, 200, &params)?;
/// assert!(!graph.is_empty());
/// # Ok::<(), confmodel_core::GraphError>(())
/// ```
#[instrument(
    name = "graph.scale_free_network",
    err,
    skip(rng, params),
    fields(
        gamma = params.gamma(),
        k_min = params.k_min(),
        max_random = params.max_random(),
    ),
)]
pub fn scale_free_network<R: Rng + ?Sized>(
    rng: &mut R,
    nodes: usize,
    params: &ScaleFreeParams,
) -> Result<AdjacencyList> {
    let matching = params.matching();
    for round in 1..=params.max_random() {
        let degrees =
            sample_powerlaw_with_natural_cutoff(rng, params.gamma(), nodes, params.k_min())?;
        if !degrees.has_even_sum() {
            debug!(
                round,
                stubs = degrees.stub_count(),
                "sampled degree sum is odd, redrawing"
            );
            continue;
        }
        let graph = configuration_model(rng, degrees.as_slice(), &matching)?;
        if !graph.is_empty() {
            return Ok(graph);
        }
        debug!(round, "sampled degree sequence was not realised, redrawing");
    }

    warn!("no sampled degree sequence was realised, returning empty graph");
    Ok(AdjacencyList::empty())
}
