//! Record assembly
//!
//! Turns matched file paths into [`FileRecord`]s, one per path, in the order
//! the scanner discovered them. No deduplication or sorting happens here.

use mlib_common::{FileList, FileRecord, UNKNOWN};
use std::path::{Path, PathBuf};

use super::field_extractor as fields;
use super::filename_tokenizer::FilenameTokens;

/// Build the record for a single library file
pub fn assemble_record(path: &Path) -> FileRecord {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let full_path = path.to_string_lossy();
    let tokens = FilenameTokens::split(&filename);

    let record = FileRecord {
        alphabetizing_letter: fields::alphabetizing_letter(&filename),
        full_path_to_folder: fields::full_path_to_folder(path),
        original_filename: filename.clone(),
        song_title: tokens
            .raw_title()
            .map(fields::split_song_title)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        voicing: fields::voicing(tokens.tokens()),
        composer_or_arranger: fields::composer_or_arranger(&tokens),
        file_type: fields::file_type(&full_path),
        file_create_date: fields::file_create_date(path),
        library_type: fields::library_type(&full_path),
    };

    tracing::debug!(
        file = %record.original_filename,
        title = %record.song_title,
        voicing = %record.voicing,
        composer = %record.composer_or_arranger,
        "Assembled record"
    );

    record
}

/// Build records for every path, preserving order
pub fn assemble_records(paths: &[PathBuf]) -> FileList {
    FileList {
        files: paths.iter().map(|p| assemble_record(p)).collect(),
    }
}
