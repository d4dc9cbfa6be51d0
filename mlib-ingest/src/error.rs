//! Error types for mlib-ingest
//!
//! Only scanner failures and setup failures surface here. Output sink
//! errors are logged where they happen and never reach the caller.

use thiserror::Error;

use crate::services::ScanError;

/// Fatal pipeline error
#[derive(Debug, Error)]
pub enum IngestError {
    /// Library folder could not be enumerated
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// mlib-common error (config, database, I/O)
    #[error("Common error: {0}")]
    Common(#[from] mlib_common::Error),
}

/// Result type for pipeline entry points
pub type IngestResult<T> = Result<T, IngestError>;
