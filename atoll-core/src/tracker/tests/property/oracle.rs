//! Breadth-first connectivity oracle for tracker property verification.
//!
//! Maintains the same link multiset the tracker maintains and recomputes
//! connected components from scratch on every query. Trusted by virtue of
//! being simple; it shares no code with the tracker under test.

use std::collections::{HashMap, HashSet, VecDeque};

/// Reference model of the tracker: a plain link multiset whose connectivity
/// is derived by exhaustive traversal.
pub(super) struct ConnectivityOracle {
    node_count: u64,
    links: Vec<(u64, u64)>,
}

impl ConnectivityOracle {
    pub(super) fn new(node_count: u64) -> Self {
        Self {
            node_count,
            links: Vec::new(),
        }
    }

    /// Records one occurrence of the pair, canonicalised to `(min, max)`.
    pub(super) fn connect(&mut self, parent: u64, connected: u64) {
        self.links.push(canonical(parent, connected));
    }

    /// Removes one occurrence of the pair when one is recorded.
    pub(super) fn disconnect(&mut self, parent: u64, connected: u64) {
        let pair = canonical(parent, connected);
        if let Some(position) = self.links.iter().position(|&candidate| candidate == pair) {
            self.links.swap_remove(position);
        }
    }

    /// Returns the number of recorded link occurrences.
    pub(super) fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Recomputes the connected components over all registered nodes.
    ///
    /// Each component is sorted by node id and the component list is ordered
    /// by smallest member, giving a canonical form for equality comparison.
    pub(super) fn components(&self) -> Vec<Vec<u64>> {
        let mut adjacency: HashMap<u64, Vec<u64>> = HashMap::new();
        for &(a, b) in &self.links {
            if a == b {
                continue;
            }
            adjacency.entry(a).or_default().push(b);
            adjacency.entry(b).or_default().push(a);
        }

        let mut seen: HashSet<u64> = HashSet::new();
        let mut components = Vec::new();
        for start in 0..self.node_count {
            if !seen.insert(start) {
                continue;
            }
            let mut component = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(node) = queue.pop_front() {
                let Some(neighbours) = adjacency.get(&node) else {
                    continue;
                };
                for &next in neighbours {
                    if seen.insert(next) {
                        component.push(next);
                        queue.push_back(next);
                    }
                }
            }
            component.sort_unstable();
            components.push(component);
        }
        components
    }
}

/// Returns the pair in canonical order `(min, max)`.
fn canonical(a: u64, b: u64) -> (u64, u64) {
    if a <= b { (a, b) } else { (b, a) }
}
