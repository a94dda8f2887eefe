//! Error types for hive-events.

use thiserror::Error;

/// Errors that can occur while resolving an events query.
#[derive(Error, Debug)]
pub enum EventsError {
    #[error("Board service error: {0}")]
    ExternalService(String),

    /// Displayed verbatim, callers match on messages like "Invalid date range".
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for hive-events operations.
pub type EventsResult<T> = Result<T, EventsError>;
