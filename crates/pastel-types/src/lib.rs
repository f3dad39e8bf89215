//! Shared types for the Pastel interpreter.
//!
//! This crate defines source locations and the error value that flows
//! through every stage of the pipeline (lexer → parser → evaluator).

mod error;
mod location;

pub use error::{ErrorKind, PastelError};
pub use location::Location;

/// Result type used throughout the Pastel interpreter.
pub type PastelResult<T> = std::result::Result<T, PastelError>;
