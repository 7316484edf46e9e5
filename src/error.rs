//! Error types
//!
//! Two families only: a protocol error (the caller asked for something the
//! dispatch surface does not understand) and a registry construction error.
//! An advisor miss is not in either family; see [`crate::registry::AdvisorNotFound`].

use thiserror::Error;

/// Protocol-level failure while dispatching a tool call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

/// Registry records violate an invariant
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate advisor id: {0}")]
    DuplicateId(String),

    #[error("duplicate advisor name (case-insensitive): {0}")]
    DuplicateName(String),

    #[error("advisor registry is empty")]
    Empty,
}
