//! Core error types for dayblock-core.
//!
//! The planning functions themselves (parse, free-time, pack, summarize)
//! have no error paths: absence is expressed with `Option`, overflow as
//! unscheduled-task membership. Errors only arise around persisted state.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dayblock-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Persisted-state errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Persisted-state errors.
///
/// Hosts are expected to map load failures to a default state
/// ([`crate::PlannerState::load_or_default`]); the planning logic never
/// sees them.
#[derive(Error, Debug)]
pub enum StateError {
    /// State file could not be read
    #[error("Failed to read state from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// State file exists but is not valid TOML for the current schema
    #[error("Failed to parse state at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },

    /// State could not be serialized or written
    #[error("Failed to write state to {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Data directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
