//! Stub pool and edge set used during one matching trial.

use rand::Rng;

/// Multiset of unmatched edge endpoints, addressed by position.
///
/// Node `i` appears `degree[i]` times. Removal swaps the last stub into the
/// vacated slot, so it is O(1) and does not preserve order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StubPool {
    stubs: Vec<usize>,
}

impl StubPool {
    pub(crate) fn from_degrees(degrees: &[usize]) -> Self {
        let stubs = degrees
            .iter()
            .enumerate()
            .flat_map(|(node, &degree)| std::iter::repeat_n(node, degree))
            .collect();
        Self { stubs }
    }

    pub(crate) fn len(&self) -> usize {
        self.stubs.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }

    /// Picks two distinct positions uniformly at random.
    ///
    /// The second position is uniform over the pool with the first position
    /// excluded. Returns `None` when fewer than two stubs remain.
    pub(crate) fn pick_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<StubPair> {
        let len = self.len();
        if len < 2 {
            return None;
        }
        let first = rng.gen_range(0..len);
        let mut second = rng.gen_range(0..len - 1);
        if second >= first {
            second += 1;
        }
        Some(StubPair {
            first,
            second,
            nodes: (*self.stubs.get(first)?, *self.stubs.get(second)?),
        })
    }

    /// Removes both stubs of `pair`.
    pub(crate) fn remove_pair(&mut self, pair: &StubPair) {
        // Remove the higher position first so the lower one stays valid.
        let (low, high) = if pair.first < pair.second {
            (pair.first, pair.second)
        } else {
            (pair.second, pair.first)
        };
        self.stubs.swap_remove(high);
        self.stubs.swap_remove(low);
    }

    #[cfg(test)]
    pub(crate) fn count_of(&self, node: usize) -> usize {
        self.stubs.iter().filter(|&&stub| stub == node).count()
    }
}

/// Two drawn stub positions and the nodes they belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct StubPair {
    first: usize,
    second: usize,
    pub(crate) nodes: (usize, usize),
}

/// Symmetric neighbour lists built up during a trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EdgeSet {
    neighbours: Vec<Vec<usize>>,
}

impl EdgeSet {
    pub(crate) fn with_nodes(nodes: usize) -> Self {
        Self {
            neighbours: vec![Vec::new(); nodes],
        }
    }

    pub(crate) fn contains(&self, left: usize, right: usize) -> bool {
        self.neighbours
            .get(left)
            .is_some_and(|list| list.contains(&right))
    }

    /// Records `left - right` in both directions.
    pub(crate) fn insert(&mut self, left: usize, right: usize) {
        if let Some(list) = self.neighbours.get_mut(left) {
            list.push(right);
        }
        if let Some(list) = self.neighbours.get_mut(right) {
            list.push(left);
        }
    }

    pub(crate) fn neighbours(&self) -> &[Vec<usize>] {
        &self.neighbours
    }
}
