use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// How numbers are compared when deciding whether data changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberEquality {
    /// Compare by numeric value, so `1` and `1.0` are equal.
    #[default]
    Numeric,
    /// Compare by JSON representation, so `1` and `1.0` differ.
    Strict,
}

/// Recursive structural equality over the JSON value model.
///
/// Records compare by key set and per-key value regardless of insertion
/// order; arrays compare element-wise in order.
#[must_use]
pub fn deep_equal(left: &Value, right: &Value, numbers: NumberEquality) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b, numbers),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len()
                && a.iter()
                    .zip(b.iter())
                    .all(|(x, y)| deep_equal(x, y, numbers))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter().all(|(key, x)| {
                    b.get(key)
                        .is_some_and(|y| deep_equal(x, y, numbers))
                })
        }
        _ => false,
    }
}

fn numbers_equal(a: &Number, b: &Number, mode: NumberEquality) -> bool {
    if mode == NumberEquality::Strict {
        return a == b;
    }
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
