//! Error types for cadence_core operations.

use thiserror::Error;

/// Core error type for cadence_core operations.
///
/// Test failures are never errors: a false assertion is recorded by listeners
/// and execution continues. Errors cover protocol misuse (starting a run
/// while one is active, signalling a case that is no longer current) and
/// configuration I/O only.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// `run` was called while a run is already in progress.
    #[error("a run is already in progress")]
    RunInProgress,

    /// A completion or timeout signal arrived while no run was active.
    #[error("no run in progress")]
    NoRunInProgress,

    /// A completion or timeout signal carried a token that does not match
    /// the currently suspended case.
    #[error("stale completion signal for case: {case}")]
    StaleCompletion {
        /// Name of the case the token was issued for, if it still exists.
        case: String,
    },

    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience Result type for cadence_core operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
