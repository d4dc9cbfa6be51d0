//! CSV output
//!
//! Header row of the nine column names, then one row per record. Quoting of
//! embedded delimiters is left to the csv writer.

use mlib_common::{FileRecord, Result, CSV_HEADER};
use std::path::Path;

/// Write `records` to `path`, replacing any existing file
pub fn write_csv(path: &Path, records: &[FileRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(record.to_csv_row())?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to CSV {}", records.len(), path.display());
    Ok(())
}
