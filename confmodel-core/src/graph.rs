//! Data model shared by the samplers, generators, and connectivity checks.
//!
//! Node identities are plain `usize` indices. A [`DegreeSequence`] assigns a
//! degree to every node `0..len`, and an [`AdjacencyList`] is the canonical
//! edge list of a realised simple graph.

use std::slice;

/// Degrees indexed by node identity.
///
/// # Examples
/// ```
/// use confmodel_core::DegreeSequence;
///
/// let degrees = DegreeSequence::from(vec![1, 2, 1]);
/// assert_eq!(degrees.stub_count(), 4);
/// assert!(degrees.has_even_sum());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeSequence(Vec<usize>);

impl DegreeSequence {
    /// Wraps an existing degree vector.
    #[must_use]
    pub fn new(degrees: Vec<usize>) -> Self {
        Self(degrees)
    }

    /// Builds the constant sequence `[degree; nodes]`.
    ///
    /// # Examples
    /// ```
    /// use confmodel_core::DegreeSequence;
    ///
    /// let regular = DegreeSequence::regular(4, 3);
    /// assert_eq!(regular.as_slice(), &[3, 3, 3, 3]);
    /// ```
    #[must_use]
    pub fn regular(nodes: usize, degree: usize) -> Self {
        Self(vec![degree; nodes])
    }

    /// Number of nodes in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the sequence has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the raw degrees.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterates over the degrees in node order.
    pub fn iter(&self) -> slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Total number of stubs, i.e. the sum of all degrees.
    #[must_use]
    pub fn stub_count(&self) -> usize {
        stub_count(&self.0)
    }

    /// Returns `true` when the sum of degrees is even.
    #[must_use]
    pub fn has_even_sum(&self) -> bool {
        self.stub_count() % 2 == 0
    }

    /// Smallest degree, or `None` for an empty sequence.
    #[must_use]
    pub fn min_degree(&self) -> Option<usize> {
        self.0.iter().copied().min()
    }

    /// Largest degree, or `None` for an empty sequence.
    #[must_use]
    pub fn max_degree(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    /// Consumes the sequence and returns the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        Self(degrees)
    }
}

impl AsRef<[usize]> for DegreeSequence {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DegreeSequence {
    type Item = &'a usize;
    type IntoIter = slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn stub_count(degrees: &[usize]) -> usize {
    degrees.iter().sum()
}

/// Canonical edge list of a simple undirected graph.
///
/// Every pair `(i, j)` satisfies `i < j` and appears once. An empty list is
/// also how the generators report that no graph could be realised.
///
/// # Examples
/// ```
/// use confmodel_core::AdjacencyList;
///
/// let graph = AdjacencyList::from_edges(vec![(2, 0), (0, 1), (1, 2), (0, 2)]);
/// assert_eq!(graph.edges(), &[(0, 1), (0, 2), (1, 2)]);
/// assert_eq!(graph.degrees(3), vec![2, 2, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    edges: Vec<(usize, usize)>,
}

impl AdjacencyList {
    /// Returns an empty list.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Canonicalises arbitrary pairs: orients each as `(min, max)`, drops
    /// self-loops and duplicates, and sorts the result.
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut edges: Vec<(usize, usize)> = edges
            .into_iter()
            .filter(|(left, right)| left != right)
            .map(|(left, right)| (left.min(right), left.max(right)))
            .collect();
        edges.sort_unstable();
        edges.dedup();
        Self { edges }
    }

    /// Builds the list from symmetric neighbour lists, emitting each pair
    /// once from its lower endpoint in sorted order.
    pub(crate) fn from_neighbours(neighbours: &[Vec<usize>]) -> Self {
        let mut edges: Vec<(usize, usize)> = neighbours
            .iter()
            .enumerate()
            .flat_map(|(node, list)| {
                list.iter()
                    .filter(move |&&other| node < other)
                    .map(move |&other| (node, other))
            })
            .collect();
        edges.sort_unstable();
        Self { edges }
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the list has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Borrows the edge pairs.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Iterates over the edge pairs.
    pub fn iter(&self) -> slice::Iter<'_, (usize, usize)> {
        self.edges.iter()
    }

    /// Counts incident edges per node for nodes `0..node_count`.
    ///
    /// Endpoints at or beyond `node_count` are ignored.
    #[must_use]
    pub fn degrees(&self, node_count: usize) -> Vec<usize> {
        let mut degrees = vec![0; node_count];
        for &(left, right) in &self.edges {
            for node in [left, right] {
                if let Some(slot) = degrees.get_mut(node) {
                    *slot += 1;
                }
            }
        }
        degrees
    }

    /// Consumes the list and returns the pairs.
    #[must_use]
    pub fn into_vec(self) -> Vec<(usize, usize)> {
        self.edges
    }
}

impl AsRef<[(usize, usize)]> for AdjacencyList {
    fn as_ref(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a (usize, usize);
    type IntoIter = slice::Iter<'a, (usize, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
