//! Literal evaluation

use crate::{EvalError, Value};

/// Evaluate a literal to a Value.
pub fn eval_lit(lit: &syn::Lit) -> Result<Value, EvalError> {
    match lit {
        syn::Lit::Str(s) => Ok(Value::string(s.value())),

        syn::Lit::Char(c) => Ok(Value::Char(c.value())),

        syn::Lit::Int(i) => eval_int_literal(i),

        syn::Lit::Float(f) => eval_float_literal(f),

        syn::Lit::Bool(b) => Ok(Value::Bool(b.value())),

        syn::Lit::ByteStr(_) => Err(unsupported("byte string literal", lit)),
        syn::Lit::Byte(_) => Err(unsupported("byte literal", lit)),
        syn::Lit::CStr(_) => Err(unsupported("C string literal", lit)),

        _ => Err(unsupported("unknown literal", lit)),
    }
}

/// Evaluate an integer literal. Only `i64` (the default) is supported.
fn eval_int_literal(lit: &syn::LitInt) -> Result<Value, EvalError> {
    let span = Some(lit.span());
    match lit.suffix() {
        "" | "i64" => lit
            .base10_parse::<i64>()
            .map(Value::Int)
            .map_err(|_| EvalError::IntegerOverflow { span }),
        other => Err(EvalError::UnsupportedLiteral {
            kind: format!("integer with suffix `{}`", other),
            span,
        }),
    }
}

/// Evaluate a float literal. Only `f64` (the default) is supported.
fn eval_float_literal(lit: &syn::LitFloat) -> Result<Value, EvalError> {
    let span = Some(lit.span());
    match lit.suffix() {
        "" | "f64" => lit
            .base10_parse::<f64>()
            .map(Value::Float)
            .map_err(|e| EvalError::TypeError {
                message: format!("invalid f64 literal: {}", e),
                span,
            }),
        other => Err(EvalError::UnsupportedLiteral {
            kind: format!("float with suffix `{}`", other),
            span,
        }),
    }
}

fn unsupported(kind: &str, lit: &syn::Lit) -> EvalError {
    EvalError::UnsupportedLiteral {
        kind: kind.to_string(),
        span: Some(lit.span()),
    }
}
