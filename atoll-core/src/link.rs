//! Node identity and link value types.
//!
//! Nodes are opaque identities supplied by the caller; the tracker never
//! inspects them beyond equality and hashing. A link relates a *parent* node
//! to a *connected* node. Connectivity is undirected, so a link contributes
//! the same adjacency regardless of endpoint order; the parent/connected
//! distinction only selects which side receives the fresh island when a
//! disconnect splits one.

use std::fmt;

/// Identifier for a tracked node.
///
/// # Examples
/// ```
/// use atoll_core::NodeId;
///
/// let id = NodeId::new(4);
/// assert_eq!(id.get(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new node identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn new(id: u64) -> Self { Self(id) }

    /// Returns the underlying numeric identifier.
    #[must_use]
    #[rustfmt::skip]
    pub fn get(self) -> u64 { self.0 }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A link between a parent node and a connected node.
///
/// # Examples
/// ```
/// use atoll_core::{Link, NodeId};
///
/// let link = Link::new(NodeId::new(1), NodeId::new(2));
/// assert_eq!(link.parent().get(), 1);
/// assert_eq!(link.connected().get(), 2);
/// assert!(!link.is_loop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    parent: NodeId,
    connected: NodeId,
}

impl Link {
    /// Creates a link between `parent` and `connected`.
    #[must_use]
    pub fn new(parent: NodeId, connected: NodeId) -> Self {
        Self { parent, connected }
    }

    /// Returns the parent endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn parent(&self) -> NodeId { self.parent }

    /// Returns the connected endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn connected(&self) -> NodeId { self.connected }

    /// Returns `true` when both endpoints are the same node.
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.parent == self.connected
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.parent, self.connected)
    }
}
