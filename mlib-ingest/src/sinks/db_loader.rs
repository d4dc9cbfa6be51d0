//! CSV bulk load into the embedded library table
//!
//! Each CSV data row is inserted under a sequential id starting at 1 (the
//! header row is not counted). Rows are inserted one at a time with no
//! enclosing transaction: a row that fails to parse or insert is logged and
//! skipped, and loading continues with the next row.

use mlib_common::db::{fetch_all, init_database, insert_record};
use mlib_common::{FileRecord, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of one bulk load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Data rows read from the CSV
    pub rows_read: usize,
    /// Rows inserted successfully
    pub rows_inserted: usize,
    /// Rows skipped after a parse or insert error
    pub rows_failed: usize,
    /// Rows in the table after loading
    pub table_rows: usize,
}

/// Load `csv_path` into the `music_library` table of `db_path`
///
/// Errors opening the database or the CSV file are returned; per-row errors
/// are not.
pub async fn load_csv_into_db(csv_path: &Path, db_path: &Path) -> Result<LoadSummary> {
    let pool = init_database(db_path).await?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(csv_path)?;

    let header = reader.headers()?.clone();
    debug!(?header, "CSV header");

    let mut summary = LoadSummary::default();

    for (index, row) in reader.records().enumerate() {
        let id = (index + 1) as i64;
        summary.rows_read += 1;

        let inserted = match row {
            Ok(row) => match FileRecord::from_csv_row(&row) {
                Ok(record) => insert_record(&pool, id, &record).await,
                Err(e) => Err(e),
            },
            Err(e) => Err(e.into()),
        };

        match inserted {
            Ok(()) => summary.rows_inserted += 1,
            Err(e) => {
                warn!(row = id, "Database error, skipping row: {}", e);
                summary.rows_failed += 1;
            }
        }
    }

    let rows = fetch_all(&pool).await?;
    for row in &rows {
        debug!(id = row.id, file = %row.record.original_filename, "Library row");
    }
    summary.table_rows = rows.len();

    info!(
        "Loaded {} of {} CSV rows into {} ({} failed, {} rows in table)",
        summary.rows_inserted,
        summary.rows_read,
        db_path.display(),
        summary.rows_failed,
        summary.table_rows
    );

    pool.close().await;
    Ok(summary)
}
