//! Static tool and resource registration for host dispatchers.
//!
//! # Responsibility
//! - Map operation names (and aliases) to store handlers plus routing
//!   metadata.
//! - Decode untyped JSON arguments and encode results for transports.
//!
//! # Invariants
//! - The registry holds no store state; callers pass the store per call.
//! - Names and aliases are unique across one registry.

pub mod handlers;
pub mod registry;
pub mod resources;

pub use registry::{RegistryError, ToolHandler, ToolMetadata, ToolRegistry, ToolSpec};

use crate::model::person::PersonValidationError;
use crate::repo::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a single tool invocation.
#[derive(Debug)]
pub enum ToolError {
    UnknownTool(String),
    InvalidArguments { tool: &'static str, message: String },
    Validation(PersonValidationError),
    Store(StoreError),
    Encode(serde_json::Error),
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTool(name) => write!(f, "unknown tool: {name}"),
            Self::InvalidArguments { tool, message } => {
                write!(f, "invalid arguments for {tool}: {message}")
            }
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "cannot encode tool result: {err}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UnknownTool(_) | Self::InvalidArguments { .. } => None,
        }
    }
}

impl From<StoreError> for ToolError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<PersonValidationError> for ToolError {
    fn from(value: PersonValidationError) -> Self {
        Self::Validation(value)
    }
}
