//! Library record models

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Placeholder for any field the extractors could not determine
pub const UNKNOWN: &str = "UNKNOWN";

/// Column names shared by the CSV header and the JSON keys, in declaration order
pub const CSV_HEADER: [&str; 9] = [
    "alphabetizing letter",
    "full path to folder",
    "original filename",
    "song title",
    "voicing",
    "composer or arranger",
    "file type",
    "file create date",
    "library type",
];

/// One library file, flattened to nine text fields
///
/// Field names double as the `music_library` column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FileRecord {
    #[serde(rename = "alphabetizing letter")]
    pub alphabetizing_letter: String,
    #[serde(rename = "full path to folder")]
    pub full_path_to_folder: String,
    #[serde(rename = "original filename")]
    pub original_filename: String,
    #[serde(rename = "song title")]
    pub song_title: String,
    pub voicing: String,
    #[serde(rename = "composer or arranger")]
    pub composer_or_arranger: String,
    #[serde(rename = "file type")]
    pub file_type: String,
    #[serde(rename = "file create date")]
    pub file_create_date: String,
    #[serde(rename = "library type")]
    pub library_type: String,
}

impl Default for FileRecord {
    fn default() -> Self {
        Self {
            alphabetizing_letter: UNKNOWN.to_string(),
            full_path_to_folder: UNKNOWN.to_string(),
            original_filename: UNKNOWN.to_string(),
            song_title: UNKNOWN.to_string(),
            voicing: UNKNOWN.to_string(),
            composer_or_arranger: UNKNOWN.to_string(),
            file_type: UNKNOWN.to_string(),
            file_create_date: UNKNOWN.to_string(),
            library_type: UNKNOWN.to_string(),
        }
    }
}

impl FileRecord {
    /// Fields in CSV column order
    pub fn to_csv_row(&self) -> [&str; 9] {
        [
            self.alphabetizing_letter.as_str(),
            self.full_path_to_folder.as_str(),
            self.original_filename.as_str(),
            self.song_title.as_str(),
            self.voicing.as_str(),
            self.composer_or_arranger.as_str(),
            self.file_type.as_str(),
            self.file_create_date.as_str(),
            self.library_type.as_str(),
        ]
    }

    /// Rebuild a record from a CSV data row
    ///
    /// The row must carry exactly nine fields.
    pub fn from_csv_row(row: &csv::StringRecord) -> Result<Self> {
        if row.len() != CSV_HEADER.len() {
            return Err(Error::InvalidInput(format!(
                "expected {} fields, found {}",
                CSV_HEADER.len(),
                row.len()
            )));
        }

        let field = |i: usize| row.get(i).unwrap_or_default().to_string();

        Ok(Self {
            alphabetizing_letter: field(0),
            full_path_to_folder: field(1),
            original_filename: field(2),
            song_title: field(3),
            voicing: field(4),
            composer_or_arranger: field(5),
            file_type: field(6),
            file_create_date: field(7),
            library_type: field(8),
        })
    }
}

/// Top-level JSON document: `{"files": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileList {
    pub files: Vec<FileRecord>,
}

/// A `music_library` row: surrogate key plus the nine record fields
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct StoredRecord {
    pub id: i64,
    #[sqlx(flatten)]
    pub record: FileRecord,
}
