//! # Music Library Common
//!
//! Shared code for the music library tools:
//! - Library record model (CSV / JSON / table row)
//! - Embedded database initialization and queries
//! - Configuration loading
//! - Error types

pub mod config;
pub mod db;
pub mod error;

pub use db::models::{FileList, FileRecord, StoredRecord, CSV_HEADER, UNKNOWN};
pub use error::{Error, Result};
