//! JSON output
//!
//! The collection is written as `{"files": [...]}`, indented four spaces,
//! with keys in field declaration order.

use mlib_common::{FileList, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `list` to `path`, replacing any existing file
pub fn write_json(path: &Path, list: &FileList) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    list.serialize(&mut serializer)?;
    writer.flush()?;

    tracing::info!("JSON output written to: {}", path.display());
    Ok(())
}

/// Read a `{"files": [...]}` document back
pub fn read_json(path: &Path) -> Result<FileList> {
    let reader = BufReader::new(File::open(path)?);
    let list: FileList = serde_json::from_reader(reader)?;

    tracing::debug!("Read {} records from {}", list.files.len(), path.display());
    Ok(list)
}
