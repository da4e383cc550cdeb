//! Incremental island connectivity tracking.
//!
//! This module provides the [`IslandTracker`], a disjoint-set structure that
//! keeps node-to-island assignments current as links are added and removed.
//! Unlike classic union-find it supports link removal: the tracker owns an
//! occurrence-counted multiset of every recorded link, so a disconnect can
//! re-derive reachability over the survivors and split an island when the
//! removed link was the last bridge between its two sides.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, instrument};

use crate::{
    adjacency::{Adjacency, Reachability},
    error::{Result, TrackerError},
    island::{Island, IslandId},
    link::{Link, NodeId},
};

/// Outcome of a successful [`IslandTracker::connect`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConnectOutcome {
    /// The endpoints already shared an island. The occurrence was still
    /// recorded, so a later disconnect must remove it before a split can
    /// happen.
    AlreadyConnected,
    /// Two islands became one.
    Merged {
        /// The id every member carries after the merge.
        island: IslandId,
        /// The id retired by the merge. Stale from now on; never reused.
        absorbed: IslandId,
    },
}

/// Outcome of a successful [`IslandTracker::disconnect`] call.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DisconnectOutcome {
    /// The endpoints were already in different islands; nothing was removed.
    AlreadyDetached,
    /// The island survived: either no occurrence of the link was recorded,
    /// or another path still connects the endpoints.
    StillConnected,
    /// Removing the occurrence severed the island in two.
    Split {
        /// The island that kept the parent endpoint and the existing id.
        retained: IslandId,
        /// The fresh island built around the connected endpoint.
        split_off: IslandId,
    },
}

/// Tracks which island every node belongs to as links come and go.
///
/// Nodes are registered once with [`add`](Self::add) and start as singleton
/// islands. [`connect`](Self::connect) merges the endpoints' islands by
/// relabelling the smaller one; [`disconnect`](Self::disconnect) removes one
/// link occurrence and splits the island when no alternate path survives.
/// Island ids are drawn from a monotonic counter and never reused, so a
/// stale id held across a merge or split simply stops resolving.
///
/// Operations are synchronous and single-threaded; wrap the tracker in one
/// exclusive lock if it must be shared.
///
/// # Examples
/// ```
/// use atoll_core::{IslandTracker, Link, NodeId};
///
/// let mut tracker = IslandTracker::new();
/// let left = NodeId::new(0);
/// let right = NodeId::new(1);
/// tracker.add(left)?;
/// tracker.add(right)?;
///
/// tracker.connect(Link::new(left, right))?;
/// assert!(tracker.is_connected(left, right)?);
///
/// tracker.disconnect(Link::new(left, right))?;
/// assert!(!tracker.is_connected(left, right)?);
/// # Ok::<(), atoll_core::TrackerError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct IslandTracker {
    assignments: HashMap<NodeId, IslandId>,
    members: BTreeMap<IslandId, Vec<NodeId>>,
    links: Adjacency,
    next_island: u64,
}

impl IslandTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker sized for `nodes` registrations.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            assignments: HashMap::with_capacity(nodes),
            members: BTreeMap::new(),
            links: Adjacency::with_capacity(nodes),
            next_island: 0,
        }
    }

    /// Registers `node` as its own singleton island and returns the fresh
    /// island id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DuplicateNode`] when the node is already
    /// registered; the tracker is left unchanged.
    pub fn add(&mut self, node: NodeId) -> Result<IslandId> {
        if self.assignments.contains_key(&node) {
            return Err(TrackerError::DuplicateNode { node });
        }
        let island = self.allocate_island();
        self.assignments.insert(node, island);
        self.members.insert(island, vec![node]);
        Ok(island)
    }

    /// Records one occurrence of `link` and merges the endpoints' islands.
    ///
    /// When the endpoints already share an island the occurrence is still
    /// recorded (parallel links are meaningful to later disconnects) and the
    /// outcome is [`ConnectOutcome::AlreadyConnected`]. Otherwise the smaller
    /// island is relabelled into the larger one and the outcome names both
    /// the surviving and the absorbed id. The endpoints are connected
    /// afterwards in every non-error case.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingNode`] when either endpoint is
    /// unregistered; the tracker is left unchanged.
    #[instrument(
        level = "debug",
        name = "tracker.connect",
        err,
        skip(self),
        fields(parent = %link.parent(), connected = %link.connected()),
    )]
    pub fn connect(&mut self, link: Link) -> Result<ConnectOutcome> {
        let parent_island = self.island_of(link.parent())?;
        let connected_island = self.island_of(link.connected())?;

        self.links.record(link.parent(), link.connected());

        if parent_island == connected_island {
            return Ok(ConnectOutcome::AlreadyConnected);
        }

        let (island, absorbed) = self.join(parent_island, connected_island);
        debug!(%island, %absorbed, "merged islands");
        Ok(ConnectOutcome::Merged { island, absorbed })
    }

    /// Removes one occurrence of `link` and splits the island when the
    /// removal disconnects it.
    ///
    /// Endpoints in different islands yield
    /// [`DisconnectOutcome::AlreadyDetached`] without touching the link
    /// table. When an occurrence is removed and no alternate path connects
    /// the endpoints, every node reachable from the connected endpoint moves
    /// to a brand-new island in one reassignment pass; the parent side keeps
    /// the existing id.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingNode`] when either endpoint is
    /// unregistered; the tracker is left unchanged.
    #[instrument(
        level = "debug",
        name = "tracker.disconnect",
        err,
        skip(self),
        fields(parent = %link.parent(), connected = %link.connected()),
    )]
    pub fn disconnect(&mut self, link: Link) -> Result<DisconnectOutcome> {
        let parent_island = self.island_of(link.parent())?;
        let connected_island = self.island_of(link.connected())?;

        if parent_island != connected_island {
            return Ok(DisconnectOutcome::AlreadyDetached);
        }
        if !self.links.remove(link.parent(), link.connected()) {
            return Ok(DisconnectOutcome::StillConnected);
        }

        match self.links.search(link.connected(), link.parent()) {
            Reachability::ReachedTarget => Ok(DisconnectOutcome::StillConnected),
            Reachability::Component(moved) => {
                let split_off = self.split(parent_island, moved);
                debug!(retained = %parent_island, %split_off, "island split");
                Ok(DisconnectOutcome::Split {
                    retained: parent_island,
                    split_off,
                })
            }
        }
    }

    /// Returns `true` when both nodes currently belong to the same island.
    ///
    /// A node is always connected to itself.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingNode`] when either node is
    /// unregistered.
    pub fn is_connected(&self, start: NodeId, end: NodeId) -> Result<bool> {
        Ok(self.island_of(start)? == self.island_of(end)?)
    }

    /// Returns the island currently containing `node`.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::MissingNode`] when the node is unregistered.
    pub fn island_of(&self, node: NodeId) -> Result<IslandId> {
        self.assignments
            .get(&node)
            .copied()
            .ok_or(TrackerError::MissingNode { node })
    }

    /// Enumerates the current islands in ascending id order.
    pub fn islands(&self) -> impl Iterator<Item = Island<'_>> {
        self.members
            .iter()
            .map(|(&id, members)| Island::new(id, members))
    }

    /// Returns the island with the given id, or `None` when the id is stale
    /// (absorbed by a merge) or was never allocated.
    #[must_use]
    pub fn island(&self, id: IslandId) -> Option<Island<'_>> {
        self.members.get(&id).map(|members| Island::new(id, members))
    }

    /// Returns the number of registered nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.assignments.len() }

    /// Returns `true` when no node has been registered.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.assignments.is_empty() }

    /// Returns `true` when `node` has been registered.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.assignments.contains_key(&node)
    }

    /// Returns the number of current islands.
    #[must_use]
    #[rustfmt::skip]
    pub fn island_count(&self) -> usize { self.members.len() }

    /// Returns the number of recorded link occurrences, counting
    /// multiplicity.
    #[must_use]
    #[rustfmt::skip]
    pub fn link_count(&self) -> usize { self.links.occurrences() }

    fn allocate_island(&mut self) -> IslandId {
        let island = IslandId::new(self.next_island);
        self.next_island += 1;
        island
    }

    /// Merges two distinct islands, relabelling the smaller into the larger.
    ///
    /// Size ties keep the numerically smaller id. Returns the surviving and
    /// the absorbed id.
    fn join(&mut self, left: IslandId, right: IslandId) -> (IslandId, IslandId) {
        let left_len = self.members.get(&left).map_or(0, Vec::len);
        let right_len = self.members.get(&right).map_or(0, Vec::len);
        let (surviving, absorbed) =
            if left_len > right_len || (left_len == right_len && left <= right) {
                (left, right)
            } else {
                (right, left)
            };

        let moved = self.members.remove(&absorbed).unwrap_or_default();
        for &node in &moved {
            self.assignments.insert(node, surviving);
        }
        self.members.entry(surviving).or_default().extend(moved);
        (surviving, absorbed)
    }

    /// Moves `moved` out of `from` into a brand-new island and returns its
    /// id. `moved` must be sorted by node id.
    fn split(&mut self, from: IslandId, moved: Vec<NodeId>) -> IslandId {
        let island = self.allocate_island();
        for &node in &moved {
            self.assignments.insert(node, island);
        }
        if let Some(remaining) = self.members.get_mut(&from) {
            remaining.retain(|node| moved.binary_search(node).is_err());
        }
        self.members.insert(island, moved);
        island
    }
}
