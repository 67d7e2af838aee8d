//! Addition on dynamic values

use std::sync::Arc;

use super::Value;
use crate::error::{type_name, SumError};

impl Value {
    /// Combine two values with `+`.
    ///
    /// - integers add with overflow checking
    /// - floats add; an integer added to a float is promoted to a float
    /// - strings and chars concatenate into a `String`
    /// - arrays concatenate
    ///
    /// # Errors
    ///
    /// Returns `IntegerOverflow` on overflow and `InvalidOperands` for any
    /// other pairing.
    pub fn plus(self, rhs: Value) -> Result<Value, SumError> {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => a
                .checked_add(b)
                .map(Value::Int)
                .ok_or(SumError::IntegerOverflow),

            (Value::Float(a), Value::Float(b)) => Ok(Value::Float(a + b)),
            (Value::Int(a), Value::Float(b)) => Ok(Value::Float(a as f64 + b)),
            (Value::Float(a), Value::Int(b)) => Ok(Value::Float(a + b as f64)),

            // Text concatenation
            (left, right) if left.is_text() && right.is_text() => {
                let mut out = into_string(left);
                push_text(&mut out, &right);
                Ok(Value::string(out))
            }

            (Value::Array(a), Value::Array(b)) => {
                let mut items = Arc::unwrap_or_clone(a);
                items.extend(b.iter().cloned());
                Ok(Value::array(items))
            }

            (left, right) => Err(SumError::InvalidOperands {
                op: "+".to_string(),
                left_type: type_name(&left).to_string(),
                right_type: type_name(&right).to_string(),
            }),
        }
    }
}

fn into_string(value: Value) -> String {
    match value {
        Value::String(s) => Arc::unwrap_or_clone(s),
        Value::Char(c) => c.to_string(),
        other => other.to_string(),
    }
}

fn push_text(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Char(c) => out.push(*c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plus_integers() {
        assert_eq!(Value::Int(2).plus(Value::Int(3)), Ok(Value::Int(5)));
    }

    #[test]
    fn test_plus_integer_overflow() {
        assert_eq!(
            Value::Int(i64::MAX).plus(Value::Int(1)),
            Err(SumError::IntegerOverflow)
        );
    }

    #[test]
    fn test_plus_floats() {
        assert_eq!(
            Value::Float(0.5).plus(Value::Float(0.25)),
            Ok(Value::Float(0.75))
        );
    }

    #[test]
    fn test_plus_chars_concatenates() {
        assert_eq!(
            Value::Char('a').plus(Value::Char('b')),
            Ok(Value::string("ab"))
        );
    }

    #[test]
    fn test_plus_mixed_text() {
        assert_eq!(
            Value::string("ab").plus(Value::Char('c')),
            Ok(Value::string("abc"))
        );
        assert_eq!(
            Value::Char('a').plus(Value::string("bc")),
            Ok(Value::string("abc"))
        );
    }

    #[test]
    fn test_plus_arrays_concatenates() {
        let left = Value::array(vec![Value::Int(1)]);
        let right = Value::array(vec![Value::Int(2), Value::Int(3)]);
        assert_eq!(
            left.plus(right),
            Ok(Value::array(vec![Value::Int(1), Value::Int(2), Value::Int(3)]))
        );
    }

    #[test]
    fn test_plus_int_and_float_promotes() {
        assert_eq!(
            Value::Int(1).plus(Value::Float(2.5)),
            Ok(Value::Float(3.5))
        );
        assert_eq!(
            Value::Float(2.5).plus(Value::Int(1)),
            Ok(Value::Float(3.5))
        );
    }

    #[test]
    fn test_plus_int_and_string_rejected() {
        assert_eq!(
            Value::Int(1).plus(Value::string("a")),
            Err(SumError::InvalidOperands {
                op: "+".to_string(),
                left_type: "i64".to_string(),
                right_type: "String".to_string(),
            })
        );
    }

    #[test]
    fn test_plus_bools_rejected() {
        assert!(matches!(
            Value::Bool(true).plus(Value::Bool(false)),
            Err(SumError::InvalidOperands { .. })
        ));
    }
}
