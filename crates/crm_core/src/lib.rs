//! Person record store: lookup, search, mutation and statistics.
//! This crate owns the store contract and both of its implementations.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod query;
pub mod repo;
pub mod tools;

pub use config::{Backend, StoreConfig, DEFAULT_DB_PATH};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::person::{Person, PersonFields, PersonId, PersonValidationError, Sex};
pub use repo::memory_repo::InMemoryPersonStore;
pub use repo::seed::seed_people;
pub use repo::sqlite_repo::SqlitePersonStore;
pub use repo::{PersonStore, StoreError, StoreResult};
pub use tools::{RegistryError, ToolError, ToolMetadata, ToolRegistry, ToolSpec};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
