//! Configuration-model generation by randomised stub matching.
//!
//! Each node contributes one stub per unit of degree. A trial repeatedly
//! draws two stubs and joins their nodes unless that would create a
//! self-loop or a repeated pair. Trials that stall are abandoned and a fresh
//! trial starts from an untouched copy of the stub pool.

mod stubs;
mod trial;

use rand::Rng;
use tracing::{Span, debug, field, info, instrument, warn};

use crate::{
    error::{GraphError, Result},
    graph::{AdjacencyList, stub_count},
    params::MatchingParams,
};

use self::{stubs::StubPool, trial::Trial};

/// Builds a random simple graph realising `degrees`.
///
/// Returns an empty [`AdjacencyList`] when no trial succeeds within
/// `params.max_trials()`; some degree sequences have no simple realisation at
/// all. An empty or all-zero sequence also yields an empty list, so callers
/// that need to tell the cases apart must check the sequence themselves.
///
/// # Errors
/// Returns [`GraphError::OddDegreeSum`] when the degrees sum to an odd number.
///
/// # Examples
/// ```
/// use confmodel_core::{MatchingParams, configuration_model};
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let graph = configuration_model(&mut rng, &[1, 1], &MatchingParams::default())?;
/// assert_eq!(graph.edges(), &[(0, 1)]);
/// # Ok::<(), confmodel_core::GraphError>(())
/// ```
#[instrument(
    name = "graph.configuration_model",
    err,
    skip(rng, degrees, params),
    fields(
        nodes = degrees.len(),
        max_trials = params.max_trials(),
        max_fails = params.max_fails(),
        trials = field::Empty,
    ),
)]
pub fn configuration_model<R: Rng + ?Sized>(
    rng: &mut R,
    degrees: &[usize],
    params: &MatchingParams,
) -> Result<AdjacencyList> {
    let sum = stub_count(degrees);
    if sum % 2 != 0 {
        return Err(GraphError::OddDegreeSum { sum });
    }
    if sum == 0 {
        return Ok(AdjacencyList::empty());
    }

    let backup = StubPool::from_degrees(degrees);
    for attempt in 1..=params.max_trials() {
        let trial = Trial::new(&backup, degrees.len(), params.max_fails());
        if let Some(graph) = trial.run(rng) {
            Span::current().record("trials", attempt);
            info!(edges = graph.len(), trials = attempt, "graph realised");
            return Ok(graph);
        }
        debug!(trial = attempt, "trial exceeded its rejection budget");
    }

    Span::current().record("trials", params.max_trials());
    warn!(
        stubs = sum,
        "stub matching exhausted all trials, returning empty graph"
    );
    Ok(AdjacencyList::empty())
}
