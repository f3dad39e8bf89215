//! Pastel lexer: converts source text into a token stream.

pub mod lexer;
pub mod token;

pub use lexer::{analyze, Lexer};
pub use token::{parse_number, Token, TokenKind};
