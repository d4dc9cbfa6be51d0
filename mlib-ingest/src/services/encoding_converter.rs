//! CSV source-encoding conversion
//!
//! CSV exports edited in spreadsheet tools are often saved as Latin-1. The
//! database loader expects UTF-8, so such files are transcoded first.

use encoding_rs::{mem, WINDOWS_1252};
use mlib_common::{Error, Result};
use std::borrow::Cow;
use std::path::Path;

/// Single-byte source encodings accepted for import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceEncoding {
    /// ISO-8859-1: every byte maps to the code point of the same value
    Latin1,
    /// windows-1252: 0x80-0x9F carry typographic characters (0x80 is '€')
    Windows1252,
}

impl SourceEncoding {
    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "iso-8859-1" | "latin1" => Some(Self::Latin1),
            "windows-1252" | "cp1252" => Some(Self::Windows1252),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Latin1 => "ISO-8859-1",
            Self::Windows1252 => WINDOWS_1252.name(),
        }
    }

    fn decode(self, bytes: &[u8]) -> (Cow<'_, str>, bool) {
        match self {
            Self::Latin1 => (mem::decode_latin1(bytes), false),
            Self::Windows1252 => WINDOWS_1252.decode_without_bom_handling(bytes),
        }
    }
}

/// Transcode `input` from the labelled encoding to UTF-8, writing `output`
pub fn convert_to_utf8(input: &Path, output: &Path, source_encoding_label: &str) -> Result<()> {
    let encoding = SourceEncoding::from_label(source_encoding_label).ok_or_else(|| {
        Error::InvalidInput(format!(
            "unsupported source encoding: {}",
            source_encoding_label
        ))
    })?;

    let bytes = std::fs::read(input)?;
    let (decoded, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::warn!(
            "Malformed {} sequences in {} were replaced",
            encoding.name(),
            input.display()
        );
    }

    std::fs::write(output, decoded.as_bytes())?;

    tracing::info!(
        "Converted {} ({}) to UTF-8: {}",
        input.display(),
        encoding.name(),
        output.display()
    );

    Ok(())
}
