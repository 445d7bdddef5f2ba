//! Configuration-model graph synthesis.
//!
//! Generates random simple graphs with a prescribed degree sequence by stub
//! matching, draws degree sequences from a power law truncated at its natural
//! cutoff, and checks whether an edge list forms a single connected
//! component.
//!
//! Every random operation takes an explicit [`rand::Rng`], so a seeded
//! generator such as `SmallRng::seed_from_u64` reproduces its output exactly.
//! Failing to realise a degree sequence within the retry budget is not an
//! error: the generators return an empty [`AdjacencyList`] instead.
//!
//! # Tracing
//!
//! Public operations open `graph.*` spans. Realised graphs are reported at
//! `INFO`, abandoned trials and redrawn sequences at `DEBUG`, and exhausted
//! budgets at `WARN`. The library never installs a subscriber.

mod configuration;
mod connectivity;
mod degree;
mod error;
mod graph;
mod params;
mod topology;

pub use crate::{
    configuration::configuration_model,
    connectivity::{Components, breadth_first, connected_components},
    degree::{TruncatedPowerLaw, natural_cutoff, sample_powerlaw_with_natural_cutoff},
    error::{GraphError, GraphErrorCode, Result},
    graph::{AdjacencyList, DegreeSequence},
    params::{MatchingParams, ScaleFreeParams},
    topology::{degree_random_regular_network, scale_free_network},
};
