//! State machine for a single stub-matching trial.
//!
//! A trial starts in [`TrialState::Matching`] and moves to
//! [`TrialState::Exhausted`] either when every stub is matched or when more
//! than `max_fails` consecutive draws are rejected. Exhausted is terminal.

use rand::Rng;

use crate::graph::AdjacencyList;

use super::stubs::{EdgeSet, StubPool};

/// How an exhausted trial ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrialOutcome {
    /// Every stub was matched without self-loops or repeated pairs.
    Success,
    /// The rejection budget ran out before the pool emptied.
    Failure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrialState {
    Matching,
    Exhausted(TrialOutcome),
}

/// One attempt at matching a private copy of the stub pool.
#[derive(Debug)]
pub(crate) struct Trial {
    stubs: StubPool,
    edges: EdgeSet,
    fails: usize,
    max_fails: usize,
    state: TrialState,
}

impl Trial {
    pub(crate) fn new(backup: &StubPool, nodes: usize, max_fails: usize) -> Self {
        Self {
            stubs: backup.clone(),
            edges: EdgeSet::with_nodes(nodes),
            fails: 0,
            max_fails,
            state: TrialState::Matching,
        }
    }

    /// Consecutive rejected draws since the last accepted pair.
    #[cfg(test)]
    pub(crate) fn fails(&self) -> usize {
        self.fails
    }

    /// Performs one draw and returns the resulting state.
    pub(crate) fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TrialState {
        if self.state == TrialState::Matching {
            self.state = self.advance(rng);
        }
        self.state
    }

    fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TrialState {
        if self.stubs.is_empty() {
            return TrialState::Exhausted(TrialOutcome::Success);
        }
        let Some(pair) = self.stubs.pick_pair(rng) else {
            return TrialState::Exhausted(TrialOutcome::Failure);
        };

        let (left, right) = pair.nodes;
        if left != right && !self.edges.contains(left, right) {
            self.edges.insert(left, right);
            self.stubs.remove_pair(&pair);
            self.fails = 0;
            return if self.stubs.is_empty() {
                TrialState::Exhausted(TrialOutcome::Success)
            } else {
                TrialState::Matching
            };
        }

        self.fails += 1;
        if self.fails > self.max_fails {
            TrialState::Exhausted(TrialOutcome::Failure)
        } else {
            TrialState::Matching
        }
    }

    /// Steps until exhausted, returning the canonical edge list on success.
    pub(crate) fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Option<AdjacencyList> {
        loop {
            match self.step(rng) {
                TrialState::Matching => {}
                TrialState::Exhausted(TrialOutcome::Success) => {
                    return Some(AdjacencyList::from_neighbours(self.edges.neighbours()));
                }
                TrialState::Exhausted(TrialOutcome::Failure) => return None,
            }
        }
    }
}
