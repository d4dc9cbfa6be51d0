//! Field extraction heuristics
//!
//! Derives the record fields from a file's path and filename tokens. Every
//! function is pure apart from [`file_create_date`], which stats the file.
//!
//! Keyword scans are ordered `(pattern, label)` tables; the first matching
//! entry wins, so table order is significant.

use chrono::{DateTime, Local};
use mlib_common::UNKNOWN;
use std::path::Path;

use super::filename_tokenizer::FilenameTokens;

/// Voicing codes in match priority order
///
/// "SATB" precedes "SSATB", so a token containing "SSATB" resolves to
/// "SATB".
pub const VOICINGS: [&str; 12] = [
    "SATB", "SSATB", "SSAATTBB", "SAB", "SA", "SSA", "SAA", "SSAA", "TB", "TTB", "TBB", "TTBB",
];

/// Lowercase path keyword -> file type label
pub const FILE_TYPES: [(&str, &str); 5] = [
    ("pdf", "PDF"),
    ("mp3", "MP3"),
    ("ogg", "OGG"),
    ("wma", "WMA"),
    ("mp4", "MP4"),
];

/// Lowercase path keyword -> library category label
pub const LIBRARY_TYPES: [(&str, &str); 3] = [
    ("christmas", "Christmas"),
    ("spring", "Spring"),
    ("repertoire", "Repertoire"),
];

/// Letter the piece is filed under
///
/// The first character, uppercased. A leading digit is skipped in favour
/// of the first alphabetic character ("3SongTitle.pdf" files under "S");
/// when there is none the digit itself is used. Characters whose uppercase
/// form is more than one character ("ß") are kept as they are.
pub fn alphabetizing_letter(filename: &str) -> String {
    let Some(first) = filename.chars().next() else {
        return UNKNOWN.to_string();
    };

    let letter = if first.is_ascii_digit() {
        filename
            .chars()
            .find(|c| c.is_alphabetic())
            .unwrap_or(first)
    } else {
        first
    };

    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u.to_string(),
        _ => letter.to_string(),
    }
}

/// Expand a camel-case title token: "OCanada" -> "O Canada"
///
/// A space is inserted before every uppercase character except the first.
pub fn split_song_title(raw_title: &str) -> String {
    let mut chars = raw_title.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut title = String::with_capacity(raw_title.len() + 4);
    title.push(first);
    for c in chars {
        if c.is_uppercase() {
            title.push(' ');
        }
        title.push(c);
    }
    title
}

/// First voicing (in [`VOICINGS`] order) contained in any token
///
/// Tokens are compared uppercased, so "satb" matches "SATB".
pub fn voicing(tokens: &[String]) -> String {
    let upper: Vec<String> = tokens.iter().map(|t| t.to_uppercase()).collect();

    VOICINGS
        .iter()
        .find(|entry| upper.iter().any(|token| token.contains(*entry)))
        .map(|entry| entry.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Composer or arranger from the fourth token
///
/// When further tokens follow, the token is the name as written. When it is
/// the last token, a trailing extension is removed ("Smith.pdf" -> "Smith"),
/// unless that would leave nothing.
pub fn composer_or_arranger(tokens: &FilenameTokens) -> String {
    match tokens.composer() {
        None => UNKNOWN.to_string(),
        Some(token) if tokens.composer_is_last() => strip_extension(token).to_string(),
        Some(token) => token.to_string(),
    }
}

fn strip_extension(token: &str) -> &str {
    match token.rfind('.') {
        Some(0) | None => token,
        Some(idx) => &token[..idx],
    }
}

/// File type from keywords in the full path (case-insensitive)
pub fn file_type(full_path: &str) -> String {
    match_keyword(full_path, &FILE_TYPES)
}

/// Library category from keywords in the full path (case-insensitive)
pub fn library_type(full_path: &str) -> String {
    match_keyword(full_path, &LIBRARY_TYPES)
}

fn match_keyword(full_path: &str, table: &[(&str, &str)]) -> String {
    let lower = full_path.to_lowercase();
    table
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Last-modified date of the file as `YYYY-MM-DD` (local time)
///
/// Returns an empty string when the file cannot be stat'ed.
pub fn file_create_date(path: &Path) -> String {
    match std::fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => {
            let modified: DateTime<Local> = modified.into();
            modified.format("%Y-%m-%d").to_string()
        }
        Err(e) => {
            tracing::warn!("Cannot read modification time of {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Directory containing the file ("." for a bare filename)
pub fn full_path_to_folder(path: &Path) -> String {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.display().to_string(),
        _ => ".".to_string(),
    }
}
