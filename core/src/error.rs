//! Error types for the simulation
//!
//! Form input guards are not errors: an empty agent name or chat message is
//! a silent no-op. The variants here cover operations the UI can ask for
//! that cannot be honored.

use thiserror::Error;

/// Errors raised by workflow and chat operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Workflow with the given ID was not found
    #[error("Workflow not found: {0}")]
    UnknownWorkflow(String),

    /// Step with the given ID was not found in the workflow
    #[error("Workflow step not found: {0}")]
    UnknownStep(String),

    /// Agent referenced by a form does not exist
    #[error("Agent not found: {0}")]
    UnknownAgent(String),

    /// Workflow has no steps to run
    #[error("Workflow has no steps: {0}")]
    EmptyWorkflow(String),

    /// Workflow already has a run in flight
    #[error("Workflow is already running: {0}")]
    AlreadyRunning(String),

    /// Workflow has no run to pause or resume
    #[error("Workflow is not running: {0}")]
    NotRunning(String),
}

/// Errors raised while writing a log export
#[derive(Error, Debug)]
pub enum ExportError {
    /// Export directory could not be created or the file could not be written
    #[error("Failed to write log export: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("Failed to serialize log export: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A timer period of zero would fire every frame
    #[error("Timer period must be greater than zero: {0}")]
    ZeroPeriod(&'static str),

    /// Probability outside [0, 1]
    #[error("Status flip chance must be within [0, 1], got {0}")]
    FlipChanceOutOfRange(f64),

    /// Log buffer cannot hold any entry
    #[error("Log capacity must be at least 1")]
    ZeroLogCapacity,
}
