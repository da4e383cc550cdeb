//! Symmetric link bookkeeping for the island tracker.
//!
//! The tracker records every link occurrence it is told about so that a
//! disconnect can re-derive reachability over the remaining links. Counts are
//! kept per unordered endpoint pair; parallel links between the same
//! endpoints accumulate multiplicity and self-loops count once per record.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::link::NodeId;

/// Outcome of a reachability search over the recorded links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Reachability {
    /// The target was reached; no component was materialised.
    ReachedTarget,
    /// The target is unreachable. Contains every node reachable from the
    /// start of the search, sorted by node id.
    Component(Vec<NodeId>),
}

/// Occurrence-counted undirected adjacency between registered nodes.
#[derive(Debug, Default, Clone)]
pub(crate) struct Adjacency {
    neighbours: HashMap<NodeId, HashMap<NodeId, usize>>,
    occurrences: usize,
}

impl Adjacency {
    pub(crate) fn with_capacity(nodes: usize) -> Self {
        Self {
            neighbours: HashMap::with_capacity(nodes),
            occurrences: 0,
        }
    }

    /// Records one occurrence of the link between `a` and `b`.
    pub(crate) fn record(&mut self, a: NodeId, b: NodeId) {
        *self.neighbours.entry(a).or_default().entry(b).or_insert(0) += 1;
        if a != b {
            *self.neighbours.entry(b).or_default().entry(a).or_insert(0) += 1;
        }
        self.occurrences += 1;
    }

    /// Removes one occurrence of the link between `a` and `b`.
    ///
    /// Returns `false` when no occurrence was recorded; the table is left
    /// unchanged in that case.
    pub(crate) fn remove(&mut self, a: NodeId, b: NodeId) -> bool {
        if !self.decrement(a, b) {
            return false;
        }
        if a != b {
            let removed = self.decrement(b, a);
            debug_assert!(removed, "adjacency counts must stay symmetric");
        }
        self.occurrences -= 1;
        true
    }

    /// Returns the total number of recorded link occurrences.
    pub(crate) fn occurrences(&self) -> usize {
        self.occurrences
    }

    /// Searches the recorded links breadth-first from `start`.
    ///
    /// Exits with [`Reachability::ReachedTarget`] as soon as `target` is
    /// seen; otherwise returns the full component containing `start`, sorted
    /// by node id so callers apply reassignments in a deterministic order.
    pub(crate) fn search(&self, start: NodeId, target: NodeId) -> Reachability {
        if start == target {
            return Reachability::ReachedTarget;
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        visited.insert(start);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let Some(counts) = self.neighbours.get(&node) else {
                continue;
            };
            for &neighbour in counts.keys() {
                if neighbour == target {
                    return Reachability::ReachedTarget;
                }
                if visited.insert(neighbour) {
                    queue.push_back(neighbour);
                }
            }
        }

        let mut component: Vec<NodeId> = visited.into_iter().collect();
        component.sort_unstable();
        Reachability::Component(component)
    }

    fn decrement(&mut self, from: NodeId, to: NodeId) -> bool {
        let Some(counts) = self.neighbours.get_mut(&from) else {
            return false;
        };
        let Some(count) = counts.get_mut(&to) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            counts.remove(&to);
        }
        true
    }
}
