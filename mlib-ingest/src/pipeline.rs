//! Library ingest pipeline
//!
//! Stage progression (sequential, each awaited before the next):
//! SCANNING → ASSEMBLING → WRITING CSV → LOADING DATABASE → WRITING JSON
//!
//! Only SCANNING can fail the run. The output stages log their errors and the
//! run carries on; the database load is skipped when there is no CSV to read.

use crate::error::IngestResult;
use crate::services::{assemble_records, FileScanner};
use crate::sinks::{load_csv_into_db, write_csv, write_json, LoadSummary};
use mlib_common::config::ResolvedConfig;
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;

/// Outcome of one pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Files whose name ends with the configured extension
    pub files_matched: usize,
    pub csv_written: bool,
    pub json_written: bool,
    /// `None` when the load was skipped or the database could not be opened
    pub load: Option<LoadSummary>,
}

/// One configured ingest run
///
/// The pipeline owns its log dispatcher; every event emitted while
/// [`Pipeline::run`] executes goes to that dispatcher rather than to the
/// process default.
pub struct Pipeline {
    config: ResolvedConfig,
    max_depth: Option<usize>,
    dispatch: Dispatch,
}

impl Pipeline {
    pub fn new(config: ResolvedConfig, dispatch: Dispatch) -> Self {
        Self {
            config,
            max_depth: None,
            dispatch,
        }
    }

    /// Limit how far below the root the scanner descends
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Run every stage inside this pipeline's dispatcher
    pub async fn run(&self) -> IngestResult<RunSummary> {
        self.run_stages()
            .with_subscriber(self.dispatch.clone())
            .await
    }

    async fn run_stages(&self) -> IngestResult<RunSummary> {
        let start_time = std::time::Instant::now();
        let config = &self.config;

        tracing::info!(
            root = %config.music_library_path.display(),
            extension = %config.extension,
            "Starting library ingest"
        );

        // Stage 1: SCANNING
        let scanner = FileScanner::new(config.extension.clone()).with_max_depth(self.max_depth);
        let paths = scanner.scan(&config.music_library_path).map_err(|e| {
            tracing::error!("Error walking library folder: {}", e);
            e
        })?;

        // Stage 2: ASSEMBLING
        let list = assemble_records(&paths);

        let mut summary = RunSummary {
            files_matched: list.files.len(),
            ..Default::default()
        };

        // Stage 3: WRITING CSV
        match write_csv(&config.csv_filename, &list.files) {
            Ok(()) => summary.csv_written = true,
            Err(e) => tracing::error!(
                "Error writing CSV file {}: {}",
                config.csv_filename.display(),
                e
            ),
        }

        // Stage 4: LOADING DATABASE
        if summary.csv_written {
            match load_csv_into_db(&config.csv_filename, &config.database_filename).await {
                Ok(load) => summary.load = Some(load),
                Err(e) => tracing::error!(
                    "Error loading {} into database {}: {}",
                    config.csv_filename.display(),
                    config.database_filename.display(),
                    e
                ),
            }
        } else {
            tracing::warn!("Skipping database load: no CSV output to read");
        }

        // Stage 5: WRITING JSON
        match write_json(&config.json_filename, &list) {
            Ok(()) => summary.json_written = true,
            Err(e) => tracing::error!(
                "Error writing JSON file {}: {}",
                config.json_filename.display(),
                e
            ),
        }

        tracing::info!(
            files = summary.files_matched,
            csv = summary.csv_written,
            json = summary.json_written,
            rows_inserted = summary.load.as_ref().map(|l| l.rows_inserted).unwrap_or(0),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Library ingest completed"
        );

        Ok(summary)
    }
}
