//! Error types for extraction, summation and literal evaluation

use thiserror::Error;

use crate::Value;

/// Errors produced while folding a collection with `+`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SumError {
    /// The collection had no elements, so there is nothing to seed the fold with
    #[error("cannot sum an empty collection")]
    EmptyCollection,

    /// Checked integer addition overflowed
    #[error("integer overflow")]
    IntegerOverflow,

    /// The operator is not defined for this pair of operand types
    #[error("cannot apply `{op}` to `{left_type}` and `{right_type}`")]
    InvalidOperands {
        /// Operator symbol
        op: String,
        /// Type of the left operand
        left_type: String,
        /// Type of the right operand
        right_type: String,
    },
}

/// Errors produced while turning a collection literal into values.
#[derive(Error, Debug)]
pub enum EvalError {
    /// The source text is not a valid expression
    #[error("parse error: {0}")]
    Parse(String),

    /// Expression kind is not a collection literal we understand
    #[error("unsupported expression: {kind}")]
    UnsupportedExpr {
        /// Human-readable expression kind
        kind: String,
        /// Source location, when available
        span: Option<proc_macro2::Span>,
    },

    /// Literal kind or suffix is not supported
    #[error("unsupported literal: {kind}")]
    UnsupportedLiteral {
        /// Human-readable literal kind
        kind: String,
        /// Source location, when available
        span: Option<proc_macro2::Span>,
    },

    /// Operand has the wrong type
    #[error("type error: {message}")]
    TypeError {
        /// Description of the mismatch
        message: String,
        /// Source location, when available
        span: Option<proc_macro2::Span>,
    },

    /// Integer literal does not fit in an `i64`
    #[error("integer literal out of range")]
    IntegerOverflow {
        /// Source location, when available
        span: Option<proc_macro2::Span>,
    },

    /// Range or array would expand to more items than the configured limit
    #[error("collection has {len} items, limit is {limit}")]
    RangeTooLarge {
        /// Number of items, counting nested arrays flattened
        len: u128,
        /// Configured `max_items`
        limit: usize,
    },

    /// Folding failed
    #[error(transparent)]
    Sum(#[from] SumError),
}

impl From<syn::Error> for EvalError {
    fn from(err: syn::Error) -> Self {
        EvalError::Parse(err.to_string())
    }
}

/// Errors produced while building a [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `Config`
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// Vowel sets are limited to ASCII characters
    #[error("vowel set member {0:?} is not an ASCII character")]
    InvalidVowel(char),
}

/// Get the type name of a value, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "bool",
        Value::Char(_) => "char",
        Value::Int(_) => "i64",
        Value::Float(_) => "f64",
        Value::String(_) => "String",
        Value::Array(_) => "array",
    }
}
