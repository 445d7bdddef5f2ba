//! Connected-component detection over edge lists.
//!
//! The node universe is the set of identities that appear in at least one
//! pair. A node with no incident edges is therefore invisible here: callers
//! that need isolated nodes to count as separate components must compare
//! against the intended node count themselves.

use tracing::{debug, instrument};

/// Component labelling of the nodes present in an edge list.
///
/// Components are numbered in order of their smallest node, starting at
/// zero.
///
/// # Examples
/// ```
/// use confmodel_core::connected_components;
///
/// let components = connected_components(&[(0, 1), (5, 6), (1, 2)]);
/// assert_eq!(components.count(), 2);
/// assert_eq!(components.component_of(2), Some(0));
/// assert_eq!(components.component_of(6), Some(1));
/// assert_eq!(components.component_of(3), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components {
    nodes: Vec<usize>,
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Number of connected components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when the edge list forms exactly one component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }

    /// Node identities seen in the edge list, in ascending order.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Component of `node`, or `None` if it never appears in the edge list.
    #[must_use]
    pub fn component_of(&self, node: usize) -> Option<usize> {
        let index = self.nodes.binary_search(&node).ok()?;
        self.labels.get(index).copied()
    }

    /// Number of nodes in each component, indexed by component.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            if let Some(size) = sizes.get_mut(label) {
                *size += 1;
            }
        }
        sizes
    }
}

/// Undirected links keyed by compact node index.
struct ConnectivityLinks {
    nodes: Vec<usize>,
    neighbours: Vec<Vec<usize>>,
}

impl ConnectivityLinks {
    fn from_pairs(adjacency: &[(usize, usize)]) -> Self {
        let mut nodes: Vec<usize> = adjacency
            .iter()
            .flat_map(|&(left, right)| [left, right])
            .collect();
        nodes.sort_unstable();
        nodes.dedup();

        let mut neighbours = vec![Vec::new(); nodes.len()];
        for &(left, right) in adjacency {
            let (Ok(left), Ok(right)) = (nodes.binary_search(&left), nodes.binary_search(&right))
            else {
                continue;
            };
            neighbours[left].push(right);
            neighbours[right].push(left);
        }
        Self { nodes, neighbours }
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

struct FillContext {
    visited: Vec<bool>,
    labels: Vec<usize>,
    worklist: Vec<usize>,
}

impl FillContext {
    fn new(capacity: usize) -> Self {
        Self {
            visited: vec![false; capacity],
            labels: vec![0; capacity],
            worklist: Vec::new(),
        }
    }

    fn visit(&mut self, node: usize, component: usize) {
        self.visited[node] = true;
        self.labels[node] = component;
        self.worklist.push(node);
    }

    fn flood(&mut self, links: &ConnectivityLinks, component: usize) {
        while let Some(node) = self.worklist.pop() {
            for &next in &links.neighbours[node] {
                if !self.visited[next] {
                    self.visit(next, component);
                }
            }
        }
    }
}

/// Labels the connected components of the graph described by `adjacency`.
///
/// Pairs may appear in either orientation; self-loops and repeats are
/// harmless. Seeds are taken in ascending node order, so labelling is
/// deterministic.
#[must_use]
pub fn connected_components(adjacency: &[(usize, usize)]) -> Components {
    let links = ConnectivityLinks::from_pairs(adjacency);
    let mut context = FillContext::new(links.len());
    let mut count = 0;
    for seed in 0..links.len() {
        if context.visited[seed] {
            continue;
        }
        context.visit(seed, count);
        context.flood(&links, count);
        count += 1;
    }
    Components {
        nodes: links.nodes,
        labels: context.labels,
        count,
    }
}

/// Reports whether `adjacency` forms a single connected component.
///
/// An empty edge list has no components and is not connected. Nodes without
/// edges are not seen, so `[(0, 1)]` is connected even if the caller meant a
/// graph on three nodes.
///
/// # Examples
/// ```
/// use confmodel_core::breadth_first;
///
/// assert!(breadth_first(&[(0, 1), (1, 2), (2, 3)]));
/// assert!(!breadth_first(&[(0, 1), (2, 3)]));
/// ```
#[must_use]
#[instrument(name = "graph.breadth_first", skip(adjacency), fields(edges = adjacency.len()))]
pub fn breadth_first(adjacency: &[(usize, usize)]) -> bool {
    let components = connected_components(adjacency);
    debug!(
        nodes = components.nodes().len(),
        components = components.count(),
        "components counted"
    );
    components.is_connected()
}
