use crate::Location;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error kind.
///
/// Only `Syntax` exists today; it covers unbalanced parentheses, arity
/// violations and malformed `define`/`if` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ErrorKind {
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax => write!(f, "syntax"),
        }
    }
}

/// A Pastel error value.
///
/// Errors are returned, never raised. The location stack starts at the point
/// of failure and grows outward as each enclosing form calls [`after`].
///
/// [`after`]: PastelError::after
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{kind} error: {message}")]
pub struct PastelError {
    /// Error kind.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Locations from the innermost failure outward.
    #[serde(rename = "stack")]
    pub locations: Vec<Location>,
}

impl PastelError {
    /// Create a new error originating at `location`.
    pub fn new(kind: ErrorKind, message: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            message: message.into(),
            locations: vec![location],
        }
    }

    /// Shorthand for a `Syntax` error at `location`.
    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self::new(ErrorKind::Syntax, message, location)
    }

    /// Create an error with an empty location stack.
    ///
    /// Built-ins have no source position of their own; the evaluator appends
    /// the call site when the error comes back.
    pub fn detached(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            locations: Vec::new(),
        }
    }

    /// Append an outer location and hand back the same error.
    pub fn after(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Where the error was first located, if anywhere.
    pub fn origin(&self) -> Option<&Location> {
        self.locations.first()
    }

    /// The whole location stack, innermost first.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }
}
