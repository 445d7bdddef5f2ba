//! End-to-end tests for the public generation and connectivity API.

mod common;

use common::assert_simple_realisation;
use confmodel_core::{
    GraphError, MatchingParams, ScaleFreeParams, breadth_first, configuration_model,
    degree_random_regular_network, natural_cutoff, sample_powerlaw_with_natural_cutoff,
    scale_free_network,
};
use confmodel_test_support::recording::RecordingLayer;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(42)
}

#[rstest]
fn single_stub_sequence_is_rejected(mut rng: SmallRng) {
    let err = configuration_model(&mut rng, &[1], &MatchingParams::default())
        .expect_err("odd sum must fail");
    assert_eq!(err, GraphError::OddDegreeSum { sum: 1 });
}

#[rstest]
fn two_single_stubs_form_one_edge(mut rng: SmallRng) {
    let graph =
        configuration_model(&mut rng, &[1, 1], &MatchingParams::default()).expect("even sum");
    assert_eq!(graph.into_vec(), vec![(0, 1)]);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn cubic_graph_on_ten_nodes(#[case] seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let graph = degree_random_regular_network(&mut rng, 10, 3, &MatchingParams::default())
        .expect("10 * 3 is even");
    if !graph.is_empty() {
        assert_eq!(graph.len(), 15);
        assert_simple_realisation(&graph, &[3; 10]);
    }
}

#[rstest]
fn path_graph_is_connected() {
    assert!(breadth_first(&[(0, 1), (1, 2), (2, 3)]));
}

#[rstest]
fn disjoint_pairs_are_disconnected() {
    assert!(!breadth_first(&[(0, 1), (2, 3)]));
}

#[rstest]
fn powerlaw_sample_has_requested_shape(mut rng: SmallRng) {
    let degrees =
        sample_powerlaw_with_natural_cutoff(&mut rng, 2.5, 100, 2).expect("parameters are valid");
    let k_cut = natural_cutoff(2.5, 100, 2).expect("parameters are valid");
    assert_eq!(degrees.len(), 100);
    assert!(degrees.iter().all(|&k| (2..=k_cut).contains(&k)));
}

#[rstest]
#[case(2.5, 2, 150)]
#[case(3.0, 2, 400)]
fn scale_free_graph_realises_a_valid_sequence(
    mut rng: SmallRng,
    #[case] gamma: f64,
    #[case] k_min: usize,
    #[case] nodes: usize,
) {
    let params = ScaleFreeParams::new(gamma, k_min).expect("parameters are valid");
    let graph = scale_free_network(&mut rng, nodes, &params).expect("parameters are valid");
    assert!(!graph.is_empty());

    let degrees = graph.degrees(nodes);
    let k_cut = natural_cutoff(gamma, nodes, k_min).expect("parameters are valid");
    assert!(degrees.iter().all(|&k| (k_min..=k_cut).contains(&k)));
    assert_simple_realisation(&graph, &degrees);
}

#[rstest]
fn dense_regular_graph_is_connected(mut rng: SmallRng) {
    // Random 4-regular graphs on 30 nodes are connected with overwhelming
    // probability.
    let graph = degree_random_regular_network(&mut rng, 30, 4, &MatchingParams::default())
        .expect("30 * 4 is even");
    assert!(!graph.is_empty());
    assert!(breadth_first(graph.edges()));
}

#[rstest]
fn realised_graph_emits_span_and_info_event(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let graph = tracing::subscriber::with_default(subscriber, || {
        configuration_model(&mut rng, &[2, 2, 2], &MatchingParams::default())
    })
    .expect("even sum");
    assert_eq!(graph.len(), 3);

    let span = layer
        .span_named("graph.configuration_model")
        .expect("graph.configuration_model span must exist");
    assert_eq!(span.field("nodes"), Some("3"));
    assert_eq!(span.field("max_trials"), Some("10"));
    assert_eq!(span.field("max_fails"), Some("1000"));
    assert_eq!(span.field("trials"), Some("1"));
    assert!(layer.has_event(Level::INFO, "graph realised"));
}

#[rstest]
fn exhausted_trials_emit_warning(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = MatchingParams::new(2, 5);

    let graph = tracing::subscriber::with_default(subscriber, || {
        configuration_model(&mut rng, &[4], &params)
    })
    .expect("even sum");
    assert!(graph.is_empty());

    let abandoned = layer
        .events()
        .iter()
        .filter(|event| {
            event.level == Level::DEBUG
                && event.message() == Some("trial exceeded its rejection budget")
        })
        .count();
    assert_eq!(abandoned, 2);
    assert!(layer.has_event(
        Level::WARN,
        "stub matching exhausted all trials, returning empty graph"
    ));
}

#[rstest]
fn rejected_parameters_close_span_with_error(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let err = tracing::subscriber::with_default(subscriber, || {
        sample_powerlaw_with_natural_cutoff(&mut rng, 1.8, 10, 1)
    })
    .expect_err("exponent must be rejected");
    assert!(matches!(err, GraphError::InvalidExponent { .. }));

    let span = layer
        .span_named("graph.sample_powerlaw")
        .expect("graph.sample_powerlaw span must exist");
    assert_eq!(span.field("nodes"), Some("10"));
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
}

fn redraw_count(layer: &RecordingLayer, message: &str) -> usize {
    layer
        .events()
        .iter()
        .filter(|event| event.level == Level::DEBUG && event.message() == Some(message))
        .count()
}

fn span_count(layer: &RecordingLayer, name: &str) -> usize {
    layer.spans().iter().filter(|span| span.name == name).count()
}

#[rstest]
fn unrealised_rounds_redraw_fresh_sequences(mut rng: SmallRng) {
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = ScaleFreeParams::new(2.5, 2)
        .expect("parameters are valid")
        .with_max_random(3)
        .with_matching(MatchingParams::new(0, 0));

    let graph = tracing::subscriber::with_default(subscriber, || {
        scale_free_network(&mut rng, 100, &params)
    })
    .expect("parameters are valid");
    assert!(graph.is_empty());

    assert_eq!(span_count(&layer, "graph.sample_powerlaw"), 3);
    let odd = redraw_count(&layer, "sampled degree sum is odd, redrawing");
    let unrealised = redraw_count(&layer, "sampled degree sequence was not realised, redrawing");
    assert_eq!(odd + unrealised, 3);
    assert_eq!(span_count(&layer, "graph.configuration_model"), unrealised);
    assert!(layer.has_event(
        Level::WARN,
        "no sampled degree sequence was realised, returning empty graph"
    ));
}

#[rstest]
fn odd_sampled_sums_are_skipped_without_matching(mut rng: SmallRng) {
    // A single node with k_min = 1 always has cutoff 1, so every draw is [1].
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let params = ScaleFreeParams::new(2.5, 1)
        .expect("parameters are valid")
        .with_max_random(3);

    let graph = tracing::subscriber::with_default(subscriber, || {
        scale_free_network(&mut rng, 1, &params)
    })
    .expect("odd sums are redrawn, not raised");
    assert!(graph.is_empty());

    assert_eq!(redraw_count(&layer, "sampled degree sum is odd, redrawing"), 3);
    assert_eq!(span_count(&layer, "graph.sample_powerlaw"), 3);
    assert_eq!(span_count(&layer, "graph.configuration_model"), 0);
    assert!(layer.has_event(
        Level::WARN,
        "no sampled degree sequence was realised, returning empty graph"
    ));
}
