//! Person store contract and its implementations.
//!
//! # Responsibility
//! - Define the function-call surface every store variant offers.
//! - Isolate SQLite query details from dispatch layers.
//!
//! # Invariants
//! - Not-found is never an error: lookups return `None`, `false` or an
//!   empty list.
//! - `StoreError` is reserved for storage-fatal conditions and is never
//!   swallowed.
//! - Returned values are owned snapshots, never references into store state.
//! - Storage order is insertion order; "first" always means earliest added.
//!
//! # Concurrency
//! Each operation runs inside one critical section of its store's coarse
//! lock. There is no isolation across calls: two callers updating the same
//! id race and the last writer wins.

use crate::db::DbError;
use crate::model::person::{Person, PersonFields, PersonId};
use crate::query::aggregate;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory_repo;
pub mod seed;
pub mod sqlite_repo;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-fatal failure surfaced by a person store.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// A persisted row could not be decoded into a `Person`.
    InvalidData(String),
    /// The store's storage handle was already released.
    Closed,
    /// A previous caller panicked while holding the store lock.
    LockPoisoned,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted person data: {message}"),
            Self::Closed => write!(f, "person store is closed"),
            Self::LockPoisoned => write!(f, "person store lock is poisoned"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::Closed | Self::LockPoisoned => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Lookup, search, mutation and statistics over person records.
///
/// Inputs are never mutated and no operation validates field formats;
/// callers own validation (see `PersonFields::validate`).
pub trait PersonStore: Send + Sync {
    /// Exact id match.
    fn get_by_id(&self, id: PersonId) -> StoreResult<Option<Person>>;

    /// First person whose name starts with `prefix`, ignoring case.
    fn get_by_name(&self, prefix: &str) -> StoreResult<Option<Person>>;

    /// First person whose surname starts with `prefix`, ignoring case.
    fn get_by_surname(&self, prefix: &str) -> StoreResult<Option<Person>>;

    /// Everyone holding `skill` (exact, ignoring case).
    fn get_by_skill(&self, skill: &str) -> StoreResult<Vec<Person>>;

    fn get_by_department(&self, department: &str) -> StoreResult<Vec<Person>>;

    fn get_by_role(&self, role: &str) -> StoreResult<Vec<Person>>;

    fn get_all(&self) -> StoreResult<Vec<Person>>;

    /// Substring search across text attributes and skills.
    ///
    /// Returns an empty list for blank queries without touching storage.
    fn search(&self, query: &str) -> StoreResult<Vec<Person>>;

    /// Persists a new record under a freshly generated id.
    fn add(&self, fields: PersonFields) -> StoreResult<Person>;

    /// Replaces every mutable field of `id`.
    ///
    /// Returns `None` without creating anything when `id` does not exist.
    fn update(&self, id: PersonId, fields: PersonFields) -> StoreResult<Option<Person>>;

    /// Hard-deletes `id`; returns whether a record was removed.
    fn delete(&self, id: PersonId) -> StoreResult<bool>;

    fn count(&self) -> StoreResult<usize>;

    /// Skill histogram keyed by first-observed spelling.
    fn skill_statistics(&self) -> StoreResult<BTreeMap<String, usize>> {
        Ok(aggregate::skill_histogram(&self.get_all()?))
    }

    fn average_age(&self) -> StoreResult<f64> {
        Ok(aggregate::average_age(&self.get_all()?))
    }

    fn oldest_person(&self) -> StoreResult<Option<Person>> {
        Ok(aggregate::oldest(&self.get_all()?).cloned())
    }

    fn most_skilled_person(&self) -> StoreResult<Option<Person>> {
        Ok(aggregate::most_skilled(&self.get_all()?).cloned())
    }
}
