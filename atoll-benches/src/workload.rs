//! Seeded synthetic edit workloads.
//!
//! Provides [`EditScript`], a reproducible connect/disconnect sequence over
//! a fixed node population. Generation keeps a ledger of recorded links so
//! most disconnects target one of them; the remainder, plus occasional
//! self-loops and parallel links, exercise the no-op paths.

use atoll_core::{
    ConnectOutcome, DisconnectOutcome, IslandTracker, Link, NodeId, TrackerError,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during edit script generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorkloadError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested per-node operation budget was zero.
    #[error("operations per node must be greater than zero")]
    ZeroOps,
}

/// Configuration for edit script generation.
#[derive(Clone, Debug)]
pub struct WorkloadConfig {
    /// Number of nodes registered before the script runs.
    pub node_count: usize,
    /// Edit operations generated per node.
    pub ops_per_node: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A single scripted edit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditOp {
    /// Record a link, merging two islands when it bridges them.
    Connect(Link),
    /// Remove one link occurrence, splitting when no path remains.
    Disconnect(Link),
}

/// Outcome tallies from replaying a script.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EditSummary {
    /// Connects that merged two islands.
    pub merges: usize,
    /// Disconnects that split an island.
    pub splits: usize,
}

/// A reproducible connect/disconnect sequence over a fixed node population.
///
/// Every scripted endpoint lies below the configured node count, so a script
/// replayed against [`EditScript::tracker`] never fails.
#[derive(Clone, Debug)]
pub struct EditScript {
    node_count: usize,
    ops: Vec<EditOp>,
}

impl EditScript {
    /// Probability that a scripted step connects rather than disconnects.
    const CONNECT_PROBABILITY: f64 = 0.6;
    /// Probability that a disconnect targets a link recorded earlier.
    const LIVE_REMOVAL_PROBABILITY: f64 = 0.8;

    /// Generates a script from `config`.
    ///
    /// The same configuration always yields the same script.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadError::ZeroNodes`] when `config.node_count` is zero
    /// and [`WorkloadError::ZeroOps`] when `config.ops_per_node` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use atoll_benches::workload::{EditScript, WorkloadConfig};
    /// let script = EditScript::generate(&WorkloadConfig {
    ///     node_count: 16,
    ///     ops_per_node: 4,
    ///     seed: 42,
    /// })
    /// .expect("valid configuration");
    /// assert_eq!(script.ops().len(), 64);
    /// ```
    pub fn generate(config: &WorkloadConfig) -> Result<Self, WorkloadError> {
        if config.node_count == 0 {
            return Err(WorkloadError::ZeroNodes);
        }
        if config.ops_per_node == 0 {
            return Err(WorkloadError::ZeroOps);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let op_count = config.node_count.saturating_mul(config.ops_per_node);
        let mut ops = Vec::with_capacity(op_count);
        let mut live: Vec<Link> = Vec::new();

        for _ in 0..op_count {
            if live.is_empty() || rng.gen_bool(Self::CONNECT_PROBABILITY) {
                let link = random_link(config.node_count, &mut rng);
                live.push(link);
                ops.push(EditOp::Connect(link));
            } else if rng.gen_bool(Self::LIVE_REMOVAL_PROBABILITY) {
                let index = rng.gen_range(0..live.len());
                ops.push(EditOp::Disconnect(live.swap_remove(index)));
            } else {
                ops.push(EditOp::Disconnect(random_link(config.node_count, &mut rng)));
            }
        }

        Ok(Self {
            node_count: config.node_count,
            ops,
        })
    }

    /// Builds a tracker with every scripted node registered.
    ///
    /// # Errors
    ///
    /// Propagates registration failures from [`IslandTracker::add`].
    pub fn tracker(&self) -> Result<IslandTracker, TrackerError> {
        let mut tracker = IslandTracker::with_capacity(self.node_count);
        for node in 0..self.node_count {
            tracker.add(NodeId::new(node as u64))?;
        }
        Ok(tracker)
    }

    /// Replays every scripted edit against `tracker` and tallies outcomes.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingNode`] when `tracker` does not contain
    /// the scripted population.
    pub fn apply(&self, tracker: &mut IslandTracker) -> Result<EditSummary, TrackerError> {
        let mut summary = EditSummary::default();
        for op in &self.ops {
            match *op {
                EditOp::Connect(link) => {
                    if matches!(tracker.connect(link)?, ConnectOutcome::Merged { .. }) {
                        summary.merges += 1;
                    }
                }
                EditOp::Disconnect(link) => {
                    if matches!(tracker.disconnect(link)?, DisconnectOutcome::Split { .. }) {
                        summary.splits += 1;
                    }
                }
            }
        }
        Ok(summary)
    }

    /// Scripted node population size.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Scripted edits in replay order.
    #[must_use]
    #[rustfmt::skip]
    pub fn ops(&self) -> &[EditOp] { &self.ops }
}

fn random_link(node_count: usize, rng: &mut SmallRng) -> Link {
    let parent = rng.gen_range(0..node_count) as u64;
    let connected = rng.gen_range(0..node_count) as u64;
    Link::new(NodeId::new(parent), NodeId::new(connected))
}
