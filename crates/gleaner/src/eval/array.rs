//! Array literal evaluation

use crate::{Config, EvalError, Value};

use super::{check_len, Evaluate};

/// Evaluate an array literal expression.
///
/// # Examples
///
/// - `[1, 2, 3]` → Array with three elements
/// - `[[1], [2]]` → nested arrays stay nested
///
/// # Errors
///
/// Returns errors from evaluating array elements, and `RangeTooLarge` if
/// the flattened elements exceed `max_items`.
pub fn eval_array(array: &syn::ExprArray, config: &Config) -> Result<Value, EvalError> {
    let elements = array
        .elems
        .iter()
        .map(|elem| elem.eval(config))
        .collect::<Result<Vec<_>, _>>()?;

    let value = Value::array(elements);
    check_len(value.leaf_count(), config)?;
    Ok(value)
}

/// Evaluate an array repeat expression `[value; count]`.
///
/// # Errors
///
/// Returns `TypeError` if count is not a non-negative integer and
/// `RangeTooLarge` if the count, or the count times the flattened size of
/// the repeated value, exceeds `max_items`.
pub fn eval_array_repeat(repeat: &syn::ExprRepeat, config: &Config) -> Result<Value, EvalError> {
    let value = repeat.expr.eval(config)?;

    let count_val = repeat.len.eval(config)?;
    let count = count_val.as_usize().ok_or_else(|| EvalError::TypeError {
        message: format!(
            "array repeat count must be a non-negative integer, got {}",
            crate::error::type_name(&count_val)
        ),
        span: Some(super::expr_span(&repeat.len)),
    })?;

    check_len(count as u128, config)?;
    check_len((count as u128).saturating_mul(value.leaf_count()), config)?;

    Ok(Value::array(vec![value; count]))
}

/// Evaluate `vec![...]` by reading its tokens as an array or repeat literal.
///
/// # Errors
///
/// Returns `UnsupportedExpr` for any macro other than `vec!`.
pub fn eval_vec_macro(mac: &syn::Macro, config: &Config) -> Result<Value, EvalError> {
    if !mac.path.is_ident("vec") {
        return Err(EvalError::UnsupportedExpr {
            kind: "macro invocation".to_string(),
            span: mac.path.get_ident().map(|ident| ident.span()),
        });
    }

    let tokens = &mac.tokens;
    let expr: syn::Expr = syn::parse2(quote::quote! { [#tokens] })?;
    expr.eval(config)
}
