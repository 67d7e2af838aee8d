//! Unary operation evaluation

use crate::error::type_name;
use crate::{Config, EvalError, Value};

use super::Evaluate;

impl Evaluate for syn::ExprUnary {
    fn eval(&self, config: &Config) -> Result<Value, EvalError> {
        let operand = self.expr.eval(config)?;
        let span = Some(super::expr_span(&self.expr));

        match (&self.op, operand) {
            (syn::UnOp::Neg(_), Value::Int(n)) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or(EvalError::IntegerOverflow { span }),
            (syn::UnOp::Neg(_), Value::Float(n)) => Ok(Value::Float(-n)),
            (syn::UnOp::Not(_), Value::Bool(b)) => Ok(Value::Bool(!b)),

            (syn::UnOp::Neg(_), other) => Err(EvalError::TypeError {
                message: format!("cannot negate `{}`", type_name(&other)),
                span,
            }),
            (syn::UnOp::Not(_), other) => Err(EvalError::TypeError {
                message: format!("cannot apply `!` to `{}`", type_name(&other)),
                span,
            }),
            _ => Err(EvalError::UnsupportedExpr {
                kind: "dereference".to_string(),
                span,
            }),
        }
    }
}
