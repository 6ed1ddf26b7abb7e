//! Error types for busloop
//!
//! Provides a unified error type for all operations.
//!
//! Lookup misses and persistence failures are ordinary values here: the shell
//! renders them and keeps prompting. Malformed rows in a route file never
//! surface as an error at all — they are skipped and counted in the load
//! report. Invalid interactive input is re-prompted at the shell and never
//! reaches this type.

use thiserror::Error;

/// Result type alias using RouteError
pub type Result<T> = std::result::Result<T, RouteError>;

/// Unified error type for busloop operations
#[derive(Debug, Error)]
pub enum RouteError {
    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("stop not found: \"{0}\"")]
    StopNotFound(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    /// Saving was refused because there is nothing to save.
    #[error("route is empty, nothing to save")]
    EmptyRoute,

    /// The route file had no rows at all. By the time this is detected the
    /// current route has already been cleared (load clears before parsing).
    #[error("route file has no header row")]
    MissingHeader,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
