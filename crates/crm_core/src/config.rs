//! Store selection and logging configuration for hosts.
//!
//! # Responsibility
//! - Describe which store variant a host wants and where it lives.
//! - Build the chosen store explicitly instead of relying on global state.

use crate::logging::{default_log_level, init_logging, LoggingError};
use crate::repo::memory_repo::InMemoryPersonStore;
use crate::repo::sqlite_repo::SqlitePersonStore;
use crate::repo::{PersonStore, StoreResult};
use std::path::PathBuf;

/// Database file used when no path is configured.
pub const DEFAULT_DB_PATH: &str = "crm.db";

/// Store variant selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// Durable SQLite file; `ephemeral` deletes it on disposal.
    Sqlite { path: PathBuf, ephemeral: bool },
    /// Process-local store; `seeded` pre-populates the example records.
    Memory { seeded: bool },
}

impl Default for Backend {
    fn default() -> Self {
        Self::Sqlite {
            path: PathBuf::from(DEFAULT_DB_PATH),
            ephemeral: false,
        }
    }
}

/// Host-facing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    pub backend: Backend,
    /// Log level; `None` means `default_log_level()`.
    pub log_level: Option<String>,
    /// Absolute log directory; logging stays disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Opens the configured store variant.
    pub fn open_store(&self) -> StoreResult<Box<dyn PersonStore>> {
        let store: Box<dyn PersonStore> = match &self.backend {
            Backend::Sqlite {
                path,
                ephemeral: false,
            } => Box::new(SqlitePersonStore::open(path)?),
            Backend::Sqlite {
                path,
                ephemeral: true,
            } => Box::new(SqlitePersonStore::open_ephemeral(path)?),
            Backend::Memory { seeded: true } => Box::new(InMemoryPersonStore::seeded()),
            Backend::Memory { seeded: false } => Box::new(InMemoryPersonStore::new()),
        };
        Ok(store)
    }

    /// Starts file logging when a log directory is configured.
    ///
    /// Returns whether logging was initialized.
    pub fn init_logging(&self) -> Result<bool, LoggingError> {
        let Some(log_dir) = &self.log_dir else {
            return Ok(false);
        };
        let level = match self.log_level.as_deref() {
            Some(level) => level,
            None => default_log_level(),
        };
        init_logging(level, &log_dir.to_string_lossy())?;
        Ok(true)
    }
}
