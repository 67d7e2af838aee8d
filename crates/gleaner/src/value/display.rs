//! Display and Debug implementations for Value

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::String(s) => write!(f, "{:?}", s.as_str()),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_str()), // No quotes for Display
            Value::Char(c) => write!(f, "{}", c),
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_strips_quotes() {
        assert_eq!(Value::string("eu").to_string(), "eu");
        assert_eq!(Value::Char('a').to_string(), "a");
    }

    #[test]
    fn test_debug_quotes_text() {
        assert_eq!(format!("{:?}", Value::string("eu")), "\"eu\"");
        assert_eq!(format!("{:?}", Value::Char('a')), "'a'");
    }

    #[test]
    fn test_debug_nested_array() {
        let v = Value::array(vec![
            Value::Int(1),
            Value::array(vec![Value::Float(2.5), Value::Bool(true)]),
        ]);
        assert_eq!(format!("{:?}", v), "[1, [2.5, true]]");
        assert_eq!(v.to_string(), "[1, [2.5, true]]");
    }
}
