//! Atoll core library.
//!
//! Incremental connectivity tracking over a mutable link set: nodes are
//! grouped into islands, links merge islands as they arrive, and removing a
//! link splits an island when no alternate path survives.

mod adjacency;
mod error;
mod island;
mod link;
mod tracker;


pub use crate::{
    error::{Result, TrackerError, TrackerErrorCode},
    island::{Island, IslandId},
    link::{Link, NodeId},
    tracker::{ConnectOutcome, DisconnectOutcome, IslandTracker},
};
