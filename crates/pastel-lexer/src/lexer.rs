//! Core Pastel lexer. Converts source text to a token stream.
//!
//! The lexer never fails. Malformed input (stray parens, an unterminated
//! string) still produces tokens; the parser or evaluator rejects them later.
//!
//! Rules, in priority order, outside a string:
//! - `;` ends a line: bumps the line counter and is not part of any token
//! - a space run flushes the buffer once
//! - `(` and `)` are always tokens of their own
//! - `"` or `'` opens a string that runs to the same quote character
//!
//! Inside a string every character is kept verbatim.

use pastel_types::Location;

use crate::token::Token;

/// Line separator after normalisation.
const LINE_END: char = ';';

/// Replace every line terminator with `;` and fold other whitespace to `' '`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(LINE_END);
            }
            '\n' => out.push(LINE_END),
            c if c.is_whitespace() => out.push(' '),
            c => out.push(c),
        }
    }
    out
}

/// Lex `text` into tokens.
pub fn analyze(text: &str) -> Vec<Token> {
    Lexer::new().lex(text)
}

/// The Pastel lexer.
///
/// Holds the scan state for one pass; [`Lexer::lex`] resets it, so a single
/// lexer can be reused across inputs.
#[derive(Debug, Default)]
pub struct Lexer {
    /// Characters waiting to become a token.
    buffer: String,
    /// Tokens emitted so far.
    tokens: Vec<Token>,
    /// Current line number (1-based).
    line: u32,
    /// Text of the current line scanned so far.
    line_text: String,
    /// Opening quote of the string being scanned, if any.
    string_opener: Option<char>,
    /// Whether the previous character was a space outside a string.
    after_space: bool,
}

impl Lexer {
    /// Create a new lexer.
    pub fn new() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.tokens = Vec::new();
        self.line = 1;
        self.line_text.clear();
        self.string_opener = None;
        self.after_space = false;
    }

    /// Lex the entire source text into a token stream.
    pub fn lex(&mut self, text: &str) -> Vec<Token> {
        self.reset();

        for ch in normalize(text).chars() {
            let in_string = self.string_opener.is_some();

            if ch == LINE_END && !in_string {
                self.line += 1;
                self.line_text.clear();
                continue;
            }
            self.line_text.push(ch);

            if ch == ' ' && !in_string {
                if !self.after_space {
                    self.after_space = true;
                    self.flush();
                }
                continue;
            }
            self.after_space = false;

            if matches!(ch, '(' | ')') && !in_string {
                self.flush();
                self.buffer.push(ch);
                self.flush();
                continue;
            }

            if matches!(ch, '"' | '\'') {
                match self.string_opener {
                    None => {
                        self.string_opener = Some(ch);
                        self.flush();
                        self.buffer.push(ch);
                        continue;
                    }
                    Some(opener) if opener == ch => {
                        self.string_opener = None;
                        self.buffer.push(ch);
                        self.flush();
                        continue;
                    }
                    // The other quote character inside a string is plain text.
                    Some(_) => {}
                }
            }

            self.buffer.push(ch);
        }
        self.flush();

        std::mem::take(&mut self.tokens)
    }

    /// Emit the buffer as one token. An empty buffer emits nothing.
    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let data = std::mem::take(&mut self.buffer);
        let location = Location::new(self.line, self.line_text.clone());
        self.tokens.push(Token::new(data, location));
    }
}
