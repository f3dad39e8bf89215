//! Built-in functions.
//!
//! Built-ins receive already-evaluated arguments. Two reduction shapes cover
//! most of them:
//! - cumulative: fold left to right, `(- 10 3 2)` is `(10 - 3) - 2`
//! - decisive: walk a chain, keeping the newest operand while the relation
//!   holds against the previous one, and answer `false` at the first break
//!
//! `~` and `!` read their first argument without an arity check; a missing
//! argument reads as `Undefined`.

use pastel_types::{ErrorKind, PastelError, PastelResult};

use crate::value::Value;
use std::cmp::Ordering;

/// Upper arity bound for variadic built-ins.
pub const MAX_ARITY: usize = 10_000;

/// Every built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modular,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
    BitNot,
    Equals,
    Differs,
    Smaller,
    Bigger,
    Below,
    Above,
    And,
    Or,
    Not,
    Zero,
    Square,
    Print,
}

/// Name table, aliases included. Several names may share one built-in.
pub const BUILTINS: &[(&str, Builtin)] = &[
    ("+", Builtin::Add),
    ("-", Builtin::Subtract),
    ("*", Builtin::Multiply),
    ("/", Builtin::Divide),
    ("%", Builtin::Modular),
    ("&", Builtin::BitAnd),
    ("|", Builtin::BitOr),
    ("^", Builtin::BitXor),
    ("<<", Builtin::ShiftLeft),
    (">>", Builtin::ShiftRight),
    ("~", Builtin::BitNot),
    ("=", Builtin::Equals),
    ("!=", Builtin::Differs),
    ("<", Builtin::Smaller),
    (">", Builtin::Bigger),
    ("<=", Builtin::Below),
    (">=", Builtin::Above),
    ("&&", Builtin::And),
    ("||", Builtin::Or),
    ("!", Builtin::Not),
    ("zero", Builtin::Zero),
    ("square", Builtin::Square),
    ("print", Builtin::Print),
    ("add", Builtin::Add),
    ("subtract", Builtin::Subtract),
    ("multiply", Builtin::Multiply),
    ("divide", Builtin::Divide),
    ("modular", Builtin::Modular),
    ("equals", Builtin::Equals),
    ("differs", Builtin::Differs),
    ("smaller", Builtin::Smaller),
    ("bigger", Builtin::Bigger),
    ("below", Builtin::Below),
    ("above", Builtin::Above),
    ("and", Builtin::And),
    ("or", Builtin::Or),
    ("not", Builtin::Not),
];

impl Builtin {
    /// Look up a built-in by any of its names.
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTINS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, builtin)| *builtin)
    }

    /// Apply the built-in to evaluated arguments.
    ///
    /// `Print` only passes its argument through here; the evaluator records
    /// the output.
    pub fn call(self, args: &[Value]) -> PastelResult<Value> {
        match self {
            Self::Add => cumulative(args, 2, MAX_ARITY, |a, b| a.plus(b)),
            Self::Subtract => arithmetic(args, |a, b| a - b),
            Self::Multiply => arithmetic(args, |a, b| a * b),
            Self::Divide => arithmetic(args, |a, b| a / b),
            Self::Modular => cumulative(args, 2, 2, |a, b| {
                Value::Number(a.to_number() % b.to_number())
            }),
            Self::BitAnd => bitwise(args, |a, b| a & b),
            Self::BitOr => bitwise(args, |a, b| a | b),
            Self::BitXor => bitwise(args, |a, b| a ^ b),
            Self::ShiftLeft => bitwise(args, |a, b| a.wrapping_shl(b as u32 & 31)),
            Self::ShiftRight => bitwise(args, |a, b| a.wrapping_shr(b as u32 & 31)),
            Self::BitNot => Ok(Value::Number(f64::from(!first(args).to_int32()))),
            Self::Equals => decisive(args, |a, b| a.loose_eq(b)),
            Self::Differs => decisive(args, |a, b| !a.loose_eq(b)),
            Self::Smaller => decisive(args, |a, b| a.compare(b) == Some(Ordering::Less)),
            Self::Bigger => decisive(args, |a, b| a.compare(b) == Some(Ordering::Greater)),
            Self::Below => decisive(args, |a, b| {
                matches!(a.compare(b), Some(Ordering::Less | Ordering::Equal))
            }),
            Self::Above => decisive(args, |a, b| {
                matches!(a.compare(b), Some(Ordering::Greater | Ordering::Equal))
            }),
            Self::And => decisive(args, |a, b| a.is_truthy() && b.is_truthy()),
            Self::Or => decisive(args, |a, b| a.is_truthy() || b.is_truthy()),
            Self::Not => Ok(Value::Bool(!first(args).is_truthy())),
            Self::Zero => {
                let is_zero = first(args).loose_eq(&Value::Number(0.0));
                Ok(Value::Number(if is_zero { 1.0 } else { 0.0 }))
            }
            // Named `square`, computes the square root.
            Self::Square => Ok(Value::Number(first(args).to_number().sqrt())),
            Self::Print => Ok(first(args)),
        }
    }
}

fn first(args: &[Value]) -> Value {
    args.first().cloned().unwrap_or(Value::Undefined)
}

fn check_arity(args: &[Value], minimum: usize, maximum: usize) -> PastelResult<()> {
    if args.len() < minimum {
        Err(PastelError::detached(
            ErrorKind::Syntax,
            format!("At least {minimum} parameters are required"),
        ))
    } else if args.len() > maximum {
        Err(PastelError::detached(
            ErrorKind::Syntax,
            format!("Number of function parameters must be under {maximum}"),
        ))
    } else {
        Ok(())
    }
}

fn cumulative(
    args: &[Value],
    minimum: usize,
    maximum: usize,
    op: impl Fn(&Value, &Value) -> Value,
) -> PastelResult<Value> {
    check_arity(args, minimum, maximum)?;
    let mut acc = args[0].clone();
    for operand in &args[1..] {
        acc = op(&acc, operand);
    }
    Ok(acc)
}

fn arithmetic(args: &[Value], op: impl Fn(f64, f64) -> f64) -> PastelResult<Value> {
    cumulative(args, 2, MAX_ARITY, |a, b| {
        Value::Number(op(a.to_number(), b.to_number()))
    })
}

fn bitwise(args: &[Value], op: impl Fn(i32, i32) -> i32) -> PastelResult<Value> {
    cumulative(args, 2, MAX_ARITY, |a, b| {
        Value::Number(f64::from(op(a.to_int32(), b.to_int32())))
    })
}

fn decisive(args: &[Value], relation: impl Fn(&Value, &Value) -> bool) -> PastelResult<Value> {
    check_arity(args, 2, MAX_ARITY)?;
    let mut head = &args[0];
    for operand in &args[1..] {
        if !relation(head, operand) {
            return Ok(Value::Bool(false));
        }
        head = operand;
    }
    Ok(Value::Bool(true))
}
