//! Island identity and borrowed island views.

use std::fmt;

use crate::link::NodeId;

/// Identifier for an island (a maximal set of mutually connected nodes).
///
/// Ids are arena-indexed: the tracker draws them from a monotonically
/// increasing counter and never reuses one. Two nodes are connected exactly
/// when they map to the same id, so comparisons are by id value rather than
/// by membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IslandId(u64);

impl IslandId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn get(self) -> u64 { self.0 }
}

impl fmt::Display for IslandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Borrowed view over a single island.
///
/// # Examples
/// ```
/// use atoll_core::{IslandTracker, NodeId};
///
/// let node = NodeId::new(7);
/// let mut tracker = IslandTracker::new();
/// let id = tracker.add(node)?;
///
/// let island = tracker.island(id).expect("freshly added island");
/// assert_eq!(island.id(), id);
/// assert_eq!(island.members(), [node]);
/// # Ok::<(), atoll_core::TrackerError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Island<'a> {
    id: IslandId,
    members: &'a [NodeId],
}

impl<'a> Island<'a> {
    pub(crate) fn new(id: IslandId, members: &'a [NodeId]) -> Self {
        Self { id, members }
    }

    /// Returns the island's identity.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> IslandId { self.id }

    /// Returns the member nodes currently assigned to this island.
    #[must_use]
    #[rustfmt::skip]
    pub fn members(&self) -> &'a [NodeId] { self.members }

    /// Returns the number of member nodes. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the island has no members. Never true for views
    /// handed out by the tracker; provided for generic callers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns whether `node` belongs to this island.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.members.contains(&node)
    }
}
