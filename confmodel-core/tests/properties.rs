//! Property tests for stub matching and connectivity.
//!
//! Degree sequences are generated from a seed and a shape so that shrinking
//! stays meaningful. Connectivity is compared with a union-find oracle.

mod common;

use common::assert_simple_realisation;
use confmodel_core::{
    MatchingParams, breadth_first, configuration_model, connected_components,
    sample_powerlaw_with_natural_cutoff,
};
use confmodel_test_support::profile::suite_proptest_config;
use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};
use test_strategy::Arbitrary;

/// Family of degree sequences fed to the generator.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
enum SequenceShape {
    /// Independent small degrees.
    #[weight(3)]
    Uniform,
    /// Every node has the same degree.
    #[weight(2)]
    Regular,
    /// Degrees drawn from a truncated power law.
    #[weight(2)]
    PowerLaw,
}

fn degree_sequence(shape: SequenceShape, seed: u64) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let nodes = rng.gen_range(1..=40);
    let mut degrees: Vec<usize> = match shape {
        SequenceShape::Uniform => (0..nodes).map(|_| rng.gen_range(0..=5)).collect(),
        SequenceShape::Regular => vec![rng.gen_range(0..=4); nodes],
        SequenceShape::PowerLaw => {
            let gamma = rng.gen_range(2.1..3.5);
            sample_powerlaw_with_natural_cutoff(&mut rng, gamma, nodes, 1)
                .map(|sequence| sequence.into_vec())
                .unwrap_or_default()
        }
    };
    if degrees.iter().sum::<usize>() % 2 != 0 {
        if let Some(first) = degrees.first_mut() {
            *first += 1;
        }
    }
    degrees
}

struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, left: usize, right: usize) {
        let left = self.find(left);
        let right = self.find(right);
        if left != right {
            self.parent[right] = left;
        }
    }
}

fn oracle_component_count(edges: &[(usize, usize)], size: usize) -> usize {
    let mut present = vec![false; size];
    let mut sets = UnionFind::new(size);
    for &(left, right) in edges {
        present[left] = true;
        present[right] = true;
        sets.union(left, right);
    }
    (0..size)
        .filter(|&node| present[node] && sets.find(node) == node)
        .count()
}

fn edge_list_strategy() -> impl Strategy<Value = Vec<(usize, usize)>> {
    (1_usize..24).prop_flat_map(|size| prop::collection::vec((0..size, 0..size), 0..40))
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn realised_graphs_match_their_sequence(shape: SequenceShape, seed: u64) {
        let degrees = degree_sequence(shape, seed);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0xC0FF_EE00);
        let graph = configuration_model(&mut rng, &degrees, &MatchingParams::default())
            .expect("sequence sum is even");
        if !graph.is_empty() {
            assert_simple_realisation(&graph, &degrees);
        }
    }

    #[test]
    fn component_count_matches_union_find(edges in edge_list_strategy()) {
        let expected = oracle_component_count(&edges, 24);
        let components = connected_components(&edges);
        prop_assert_eq!(components.count(), expected);
        prop_assert_eq!(breadth_first(&edges), expected == 1);
    }

    #[test]
    fn components_never_split_an_edge(edges in edge_list_strategy()) {
        let components = connected_components(&edges);
        for &(left, right) in &edges {
            prop_assert_eq!(components.component_of(left), components.component_of(right));
        }
        prop_assert_eq!(components.sizes().iter().sum::<usize>(), components.nodes().len());
    }
}
