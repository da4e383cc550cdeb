//! Error types for the atoll core library.
//!
//! Defines the tracker error taxonomy, stable machine-readable codes, and a
//! convenient result alias.

use thiserror::Error;

use crate::link::NodeId;

/// Errors returned by [`crate::IslandTracker`] operations.
///
/// Every failing operation leaves the tracker unchanged; registration is
/// checked before any bookkeeping is touched.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum TrackerError {
    /// An operation referenced a node that was never added.
    #[error("node {node} has not been added to the tracker")]
    MissingNode {
        /// The unregistered node referenced by the operation.
        node: NodeId,
    },
    /// `add` was called a second time for the same node.
    #[error("node {node} has already been added to the tracker")]
    DuplicateNode {
        /// The node that was already registered.
        node: NodeId,
    },
}

impl TrackerError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> TrackerErrorCode {
        match self {
            Self::MissingNode { .. } => TrackerErrorCode::MissingNode,
            Self::DuplicateNode { .. } => TrackerErrorCode::DuplicateNode,
        }
    }
}

/// Machine-readable error codes for [`TrackerError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TrackerErrorCode {
    /// An operation referenced a node that was never added.
    MissingNode,
    /// `add` was called a second time for the same node.
    DuplicateNode,
}

impl TrackerErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingNode => "MISSING_NODE",
            Self::DuplicateNode => "DUPLICATE_NODE",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, TrackerError>;
