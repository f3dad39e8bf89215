//! Runtime values and the host-style coercions built-ins rely on.
//!
//! Mismatched types never fail. Text meets numbers through [`Value::to_number`],
//! bitwise operators go through [`Value::to_int32`], and `+` concatenates as
//! soon as either side is text-like.

use pastel_lexer::parse_number;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A Pastel value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Number(f64),
    /// Result of a comparison or `!`. The literals `true`/`false` are numbers.
    Bool(bool),
    /// String literal text, quotes included.
    Str(String),
    /// An identifier that resolved to nothing; evaluates to its own text.
    Name(String),
    List(Vec<Value>),
    /// Produced by `define`. Dropped from argument lists.
    Null,
    /// Missing `if` branch, missing argument, or an empty form.
    Undefined,
}

impl Value {
    /// Returns `true` for the non-values `Null` and `Undefined`.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    /// Returns `true` if this is the bare identifier `name`.
    pub fn is_name(&self, name: &str) -> bool {
        matches!(self, Self::Name(n) if n == name)
    }

    fn is_text_like(&self) -> bool {
        matches!(self, Self::Str(_) | Self::Name(_) | Self::List(_))
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Bool(b) => *b,
            Self::Str(s) | Self::Name(s) => !s.is_empty(),
            Self::List(_) => true,
            Self::Null | Self::Undefined => false,
        }
    }

    /// Numeric reading of the value; `NaN` when there is none.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Null => 0.0,
            Self::Undefined => f64::NAN,
            Self::Str(s) | Self::Name(s) => parse_number(s).unwrap_or(f64::NAN),
            Self::List(_) => parse_number(&self.to_string()).unwrap_or(f64::NAN),
        }
    }

    /// 32-bit two's complement reading, wrapping out-of-range numbers.
    pub fn to_int32(&self) -> i32 {
        let n = self.to_number();
        if !n.is_finite() {
            return 0;
        }
        let wrapped = n.trunc().rem_euclid(4_294_967_296.0);
        if wrapped >= 2_147_483_648.0 {
            (wrapped - 4_294_967_296.0) as i32
        } else {
            wrapped as i32
        }
    }

    /// Loose equality: numbers and text compare numerically, booleans count
    /// as `1`/`0`, and `Null`/`Undefined` only equal each other.
    pub fn loose_eq(&self, other: &Value) -> bool {
        use Value::*;
        match (self, other) {
            (Null | Undefined, Null | Undefined) => true,
            (Null | Undefined, _) | (_, Null | Undefined) => false,
            (Number(a), Number(b)) => a == b,
            (Bool(a), Bool(b)) => a == b,
            (Bool(_), _) => Number(self.to_number()).loose_eq(other),
            (_, Bool(_)) => self.loose_eq(&Number(other.to_number())),
            // Two lists are never the same list.
            (List(_), List(_)) => false,
            (Number(_), _) | (_, Number(_)) => self.to_number() == other.to_number(),
            _ => self.to_string() == other.to_string(),
        }
    }

    /// Relational comparison. Text against text compares as strings,
    /// anything else numerically. `None` when the numbers are unordered.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        if self.is_text_like() && other.is_text_like() {
            Some(self.to_string().cmp(&other.to_string()))
        } else {
            self.to_number().partial_cmp(&other.to_number())
        }
    }

    /// `+`: concatenation if either side is text-like, else addition.
    pub fn plus(&self, other: &Value) -> Value {
        if self.is_text_like() || other.is_text_like() {
            Value::Str(format!("{self}{other}"))
        } else {
            Value::Number(self.to_number() + other.to_number())
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write_number(f, *n),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) | Self::Name(s) => f.write_str(s),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i != 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_nothing() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
