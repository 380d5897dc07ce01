//! Query predicates and aggregations shared by every store variant.
//!
//! # Responsibility
//! - Keep match semantics (prefix, exact, substring) in one place.
//! - Compute statistics over person snapshots in storage order.
//!
//! # Invariants
//! - Case-insensitive comparisons fold with Unicode lowercase mapping.
//! - Ties resolve to the earliest record in the provided order.

pub mod aggregate;
pub mod matching;
