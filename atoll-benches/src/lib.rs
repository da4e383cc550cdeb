//! Benchmark support crate for atoll.
//!
//! Provides seeded synthetic edit workloads and parameter types used by the
//! Criterion benchmarks that measure incremental connectivity maintenance.

pub mod error;
pub mod params;
pub mod workload;
