//! The scalar cell values the demo tables are built from.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

/// ValueKind names a column's declared type without holding a value,
/// pairing with Value the way a catalog pairs with its cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueKind {
    Integer,
    Float,
    Text,
}

impl Value {
    /// Integer view of a cell for numeric comparisons. Text yields its
    /// leading digits, floats truncate toward zero, null yields nothing.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            Value::Float(value) => Some(*value as i64),
            Value::Text(value) => leading_integer(value),
            Value::Null => None,
        }
    }

    /// Checks a cell against a column's declared kind. Null passes for
    /// any kind since the model allows missing values everywhere.
    pub(crate) fn matches_kind(&self, kind: ValueKind) -> bool {
        match (self, kind) {
            (Value::Integer(_), ValueKind::Integer) => true,
            (Value::Float(_), ValueKind::Float) => true,
            (Value::Text(_), ValueKind::Text) => true,
            (Value::Null, _) => true,
            (_, _) => false,
        }
    }

    /// Ordering between two cells for ORDER BY. Numeric kinds compare
    /// numerically across each other, text compares lexicographically,
    /// anything else ties.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => left.cmp(right),
            (Value::Float(left), Value::Float(right)) => {
                left.partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Value::Integer(left), Value::Float(right)) => {
                (*left as f64).partial_cmp(right).unwrap_or(Ordering::Equal)
            }
            (Value::Float(left), Value::Integer(right)) => {
                left.partial_cmp(&(*right as f64)).unwrap_or(Ordering::Equal)
            }
            (Value::Text(left), Value::Text(right)) => left.cmp(right),
            (_, _) => Ordering::Equal,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(ref value) => {
                write!(f, "{}", value)
            }
            Value::Float(ref value) => {
                write!(f, "{}", value)
            }
            Value::Text(ref value) => {
                write!(f, "{}", value)
            }
            Value::Null => {
                write!(f, "null")
            }
        }
    }
}

/// Parses the run of digits (with an optional sign) at the front of a
/// string, ignoring whatever follows.
fn leading_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let mut end = 0;
    for (i, c) in trimmed.char_indices() {
        if c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+')) {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    trimmed[..end].parse::<i64>().ok()
}
