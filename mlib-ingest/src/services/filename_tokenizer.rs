//! Filename tokenizer
//!
//! Library files are named `<dir>_<Title>_<Voicing>_<Composer>.<ext>`, with
//! spaces, underscores and dots all acting as separators. Token positions
//! carry the meaning:
//!
//! | index | role                 |
//! |-------|----------------------|
//! | 0     | directory hint       |
//! | 1     | raw (camel-case) title |
//! | 2     | raw voicing hint     |
//! | 3     | composer / arranger  |
//!
//! Consecutive separators produce empty tokens; they are kept so positions
//! stay as the file was named.

/// Ordered tokens of one base filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTokens {
    tokens: Vec<String>,
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '_' | '.')
}

impl FilenameTokens {
    /// Split a base filename on space, underscore and dot
    pub fn split(filename: &str) -> Self {
        let tokens: Vec<String> = filename.split(is_separator).map(str::to_string).collect();

        tracing::trace!(filename, count = tokens.len(), ?tokens, "Split filename");

        Self { tokens }
    }

    /// All tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn raw_title(&self) -> Option<&str> {
        self.get(1)
    }

    pub fn composer(&self) -> Option<&str> {
        self.get(3)
    }

    /// True when the composer token is the final token
    pub fn composer_is_last(&self) -> bool {
        self.tokens.len() == 4
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}

impl From<Vec<String>> for FilenameTokens {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}
