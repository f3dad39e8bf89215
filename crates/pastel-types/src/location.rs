use serde::{Deserialize, Serialize};
use std::fmt;

/// Lightweight source location, used only for diagnostics.
///
/// `line` is 1-based. `text` is the text of that line scanned so far,
/// up to and including the character that completed the token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub text: String,
}

impl Location {
    /// Create a new location.
    pub fn new(line: u32, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }

    /// Start of the given line, with nothing scanned yet.
    pub fn line_start(line: u32) -> Self {
        Self::new(line, "")
    }

    /// 1-based column just past the scanned text.
    pub fn column(&self) -> u32 {
        self.text.chars().count() as u32
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column())
    }
}
