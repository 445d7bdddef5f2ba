use confmodel_core::AdjacencyList;

/// Asserts that `graph` is a simple graph realising `degrees` exactly.
pub fn assert_simple_realisation(graph: &AdjacencyList, degrees: &[usize]) {
    assert!(
        graph.iter().all(|&(left, right)| left < right),
        "pairs must be canonical and loop-free: {:?}",
        graph.edges()
    );
    let mut pairs = graph.edges().to_vec();
    pairs.sort_unstable();
    pairs.dedup();
    assert_eq!(pairs.len(), graph.len(), "pairs must be unique");
    assert_eq!(graph.degrees(degrees.len()), degrees);
}
