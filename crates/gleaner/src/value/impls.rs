//! Value constructors, predicates, extractors and From traits

use std::sync::Arc;

use super::*;

impl Value {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Arc::new(s.into()))
    }

    /// Create an array value
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Arc::new(items))
    }

    /// Check if value is text (string or char)
    pub fn is_text(&self) -> bool {
        matches!(self, Value::String(_) | Value::Char(_))
    }

    /// Extract as usize (non-negative integers only)
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Value::Int(n) => usize::try_from(*n).ok(),
            _ => None,
        }
    }

    /// Number of non-array values reachable from this value.
    ///
    /// This is the size the value flattens to once nested arrays are
    /// concatenated, so it bounds how large a sum over it can grow.
    pub fn leaf_count(&self) -> u128 {
        match self {
            Value::Array(items) => items
                .iter()
                .fold(0u128, |acc, item| acc.saturating_add(item.leaf_count())),
            _ => 1,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Arc::new(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}
