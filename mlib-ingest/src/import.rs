//! Stand-alone CSV import
//!
//! Loads a previously exported (or hand-edited) library CSV into the
//! embedded database, transcoding it to UTF-8 first when a source encoding
//! is given.

use crate::services::encoding_converter::convert_to_utf8;
use crate::sinks::{load_csv_into_db, LoadSummary};
use mlib_common::Result;
use std::path::{Path, PathBuf};

/// Sibling path for the transcoded copy: `library.csv` → `library_utf8.csv`
pub fn utf8_sibling(csv_path: &Path) -> PathBuf {
    let stem = csv_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match csv_path.extension() {
        Some(ext) => format!("{}_utf8.{}", stem, ext.to_string_lossy()),
        None => format!("{}_utf8", stem),
    };
    csv_path.with_file_name(name)
}

/// Import `csv_path` into `db_path`
pub async fn run_import(
    csv_path: &Path,
    encoding: Option<&str>,
    db_path: &Path,
) -> Result<LoadSummary> {
    let source = match encoding {
        Some(label) => {
            let converted = utf8_sibling(csv_path);
            convert_to_utf8(csv_path, &converted, label)?;
            converted
        }
        None => csv_path.to_path_buf(),
    };

    load_csv_into_db(&source, db_path).await
}
