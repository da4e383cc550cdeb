//! Property-based tests for the island tracker.
//!
//! Verifies the tracker against a from-scratch breadth-first connectivity
//! oracle, validates structural invariants (partition consistency, stable
//! enumeration order, arena id monotonicity), and checks that replaying an
//! edit script never leaks hash-map iteration order into outcomes.

mod oracle;
