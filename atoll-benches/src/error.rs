//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use crate::workload::WorkloadError;
use atoll_core::TrackerError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Edit script generation failed.
    #[error("workload generation failed: {0}")]
    Workload(#[from] WorkloadError),
    /// A tracker operation failed while preparing benchmark state.
    #[error("tracker operation failed: {0}")]
    Tracker(#[from] TrackerError),
}
