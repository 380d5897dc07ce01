//! Domain model for CRM person records.
//!
//! # Responsibility
//! - Define the canonical `Person` record returned by every store variant.
//! - Define the mutable field set accepted by add/update paths.
//!
//! # Invariants
//! - Every person is identified by a store-assigned `PersonId`.
//! - Deletion is a hard delete; ids are never reused.

pub mod person;
