// SPDX-License-Identifier: Unlicense
use std::fmt;

use crate::ast::BiOpKind;

/// Result of evaluating a node. `Error` absorbs every operation it takes part in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Error(String),
}

impl Value {
    /// Converts a literal's digit run. Text that does not fit an `i64` becomes an `Error`.
    pub fn from_literal(lit: &str) -> Self {
        match lit.parse::<i64>() {
            Ok(n) => Value::Int(n),
            Err(_) => Value::Error(format!("illegal literal '{lit}'")),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Error(_) => None,
        }
    }

    /// Applies `op`. Arithmetic is checked: overflow, a zero divisor and a
    /// negative exponent all produce `Error` values.
    pub fn binary_op(op: BiOpKind, lhs: Value, rhs: Value) -> Value {
        let (x, y) = match (lhs, rhs) {
            (Value::Int(x), Value::Int(y)) => (x, y),
            (err @ Value::Error(_), _) | (_, err @ Value::Error(_)) => return err,
        };

        let result = match op {
            BiOpKind::Add => x.checked_add(y),
            BiOpKind::Sub => x.checked_sub(y),
            BiOpKind::Mul => x.checked_mul(y),
            BiOpKind::Div => {
                if y == 0 {
                    return Value::Error(format!("division by zero: '{x} / {y}'"));
                }
                x.checked_div(y)
            }
            BiOpKind::Rem => {
                if y == 0 {
                    return Value::Error(format!("modulo of zero: '{x} % {y}'"));
                }
                x.checked_rem(y)
            }
            BiOpKind::Pow => {
                if y < 0 {
                    return Value::Error(format!("negative exponent: '{x} ^ {y}'"));
                }
                power(x, y)
            }
        };

        match result {
            Some(n) => Value::Int(n),
            None => Value::Error(format!("integer overflow: '{x} {} {y}'", op.symbol())),
        }
    }
}

/// `base` multiplied by itself `exponent` times. Bases of magnitude one or
/// less never overflow, so their result is read off directly instead of looping.
fn power(base: i64, exponent: i64) -> Option<i64> {
    match base {
        _ if exponent == 0 => Some(1),
        0 | 1 => Some(base),
        -1 => Some(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => {
            let mut acc: i64 = 1;
            for _ in 0..exponent {
                acc = acc.checked_mul(base)?;
            }
            Some(acc)
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Error(msg) => f.write_str(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: BiOpKind, x: i64, y: i64) -> Value {
        Value::binary_op(op, Value::Int(x), Value::Int(y))
    }

    #[test]
    fn integer_arithmetic() {
        assert_eq!(op(BiOpKind::Add, 2, 3), Value::Int(5));
        assert_eq!(op(BiOpKind::Sub, 2, 3), Value::Int(-1));
        assert_eq!(op(BiOpKind::Mul, -4, 3), Value::Int(-12));
        assert_eq!(op(BiOpKind::Div, 7, 2), Value::Int(3));
        assert_eq!(op(BiOpKind::Div, -7, 2), Value::Int(-3));
        assert_eq!(op(BiOpKind::Rem, -7, 2), Value::Int(-1));
    }

    #[test]
    fn zero_divisors_are_errors() {
        assert_eq!(
            op(BiOpKind::Div, 5, 0),
            Value::Error("division by zero: '5 / 0'".into())
        );
        assert_eq!(
            op(BiOpKind::Rem, 5, 0),
            Value::Error("modulo of zero: '5 % 0'".into())
        );
    }

    #[test]
    fn exponent_cases() {
        assert_eq!(op(BiOpKind::Pow, 2, 0), Value::Int(1));
        assert_eq!(op(BiOpKind::Pow, 0, 0), Value::Int(1));
        assert_eq!(op(BiOpKind::Pow, 2, 3), Value::Int(8));
        assert_eq!(op(BiOpKind::Pow, -3, 3), Value::Int(-27));
        assert_eq!(op(BiOpKind::Pow, -1, i64::MAX), Value::Int(-1));
        assert_eq!(op(BiOpKind::Pow, 1, i64::MAX), Value::Int(1));
        assert_eq!(op(BiOpKind::Pow, 0, i64::MAX), Value::Int(0));
        assert_eq!(
            op(BiOpKind::Pow, 2, -1),
            Value::Error("negative exponent: '2 ^ -1'".into())
        );
        assert_eq!(
            op(BiOpKind::Pow, 2, 64),
            Value::Error("integer overflow: '2 ^ 64'".into())
        );
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(op(BiOpKind::Add, i64::MAX, 1).is_error());
        assert!(op(BiOpKind::Mul, i64::MIN, -1).is_error());
        assert_eq!(
            op(BiOpKind::Div, i64::MIN, -1),
            Value::Error(format!("integer overflow: '{} / -1'", i64::MIN))
        );
    }

    #[test]
    fn errors_absorb() {
        let err = Value::Error("boom".into());
        for kind in [BiOpKind::Add, BiOpKind::Div, BiOpKind::Pow] {
            assert_eq!(Value::binary_op(kind, err.clone(), Value::Int(1)), err);
            assert_eq!(Value::binary_op(kind, Value::Int(1), err.clone()), err);
        }
        let other = Value::Error("other".into());
        assert_eq!(Value::binary_op(BiOpKind::Add, err.clone(), other), err);
    }

    #[test]
    fn literals() {
        assert_eq!(Value::from_literal("0042"), Value::Int(42));
        assert_eq!(
            Value::from_literal("99999999999999999999"),
            Value::Error("illegal literal '99999999999999999999'".into())
        );
        assert_eq!(Value::Int(-3).to_string(), "-3");
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Error("x".into()).as_int(), None);
    }
}
