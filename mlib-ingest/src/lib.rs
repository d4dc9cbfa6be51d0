//! mlib-ingest library
//!
//! Walks a music library folder, derives catalogue fields from each
//! filename, and writes the records to CSV, JSON and the embedded database.

pub mod cli;
pub mod error;
pub mod import;
pub mod logging;
pub mod pipeline;
pub mod services;
pub mod sinks;

pub use error::{IngestError, IngestResult};
pub use pipeline::{Pipeline, RunSummary};
