//! Pipeline stages: scan, tokenize, extract, assemble

pub mod encoding_converter;
pub mod field_extractor;
pub mod file_scanner;
pub mod filename_tokenizer;
pub mod record_assembler;

pub use file_scanner::{FileScanner, ScanError};
pub use filename_tokenizer::FilenameTokens;
pub use record_assembler::{assemble_record, assemble_records};
