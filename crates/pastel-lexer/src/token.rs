//! Token types for the Pastel lexer.
//!
//! A [`Token`] keeps the exact source text it was built from; classification
//! into a [`TokenKind`] happens once, when the lexer flushes its buffer.

use pastel_types::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Every token kind in Pastel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Anything that is not a paren, number or quoted string: `define`, `+`, `n`
    Id,
    /// Quoted text, quotes included: `"hi"`, `'a b'`
    Str,
    /// Numeric text: `42`, `3.5`, `-1e3`, `0x1f`
    Number,
}

impl TokenKind {
    /// Classify a flushed buffer.
    pub fn classify(data: &str) -> Self {
        if data == "(" {
            Self::Open
        } else if data == ")" {
            Self::Close
        } else if parse_number(data).is_some() {
            Self::Number
        } else if data.starts_with(['"', '\'']) {
            Self::Str
        } else {
            Self::Id
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Id => "id",
            Self::Str => "string",
            Self::Number => "number",
        };
        f.write_str(name)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the Pastel lexer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// Exact source text (quotes included for strings).
    pub data: String,
    /// Where the token was flushed.
    pub location: Location,
}

impl Token {
    /// Create a token, classifying `data`.
    pub fn new(data: impl Into<String>, location: Location) -> Self {
        let data = data.into();
        Self {
            kind: TokenKind::classify(&data),
            data,
            location,
        }
    }

    /// Returns `true` for `(` and `)`.
    pub fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::Open | TokenKind::Close)
    }
}

// ─────────────────────────────────────────────────────────────────────
// Numbers
// ─────────────────────────────────────────────────────────────────────

/// Parse numeric text the way the editor host reads numbers.
///
/// Accepts decimal literals (sign, fraction, exponent), `Infinity` with an
/// optional sign, and unsigned `0x`/`0o`/`0b` integers. Surrounding
/// whitespace is ignored and blank text reads as `0`. Everything else,
/// including `nan` and `inf` spellings, is not a number.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix).ok().map(|n| n as f64);
    }

    // `f64::from_str` also takes `inf`, `infinity` and `nan`.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}
