//! Range expression evaluation

use crate::error::type_name;
use crate::{Config, EvalError, Value};

use super::{check_len, Evaluate};

/// Evaluate a range expression.
///
/// Ranges are eagerly expanded to an array.
///
/// # Examples
///
/// - `1..5` → [1, 2, 3, 4]
/// - `1..=4` → [1, 2, 3, 4]
/// - `'a'..='e'` → ['a', 'b', 'c', 'd', 'e']
/// - `5..` → Unbounded (not supported)
///
/// # Errors
///
/// Returns `TypeError` if the bounds are not both integers or both chars,
/// `RangeTooLarge` if the range is longer than `max_items`, and
/// `UnsupportedExpr` for unbounded ranges.
pub fn eval_range(range: &syn::ExprRange, config: &Config) -> Result<Value, EvalError> {
    let (Some(start_expr), Some(end_expr)) = (&range.start, &range.end) else {
        return Err(EvalError::UnsupportedExpr {
            kind: "unbounded range (use bounded ranges like 0..10)".to_string(),
            span: None,
        });
    };
    let inclusive = matches!(range.limits, syn::RangeLimits::Closed(_));

    let start = start_expr.eval(config)?;
    let end = end_expr.eval(config)?;

    match (&start, &end) {
        (Value::Int(a), Value::Int(b)) => int_range(*a, *b, inclusive, config),
        (Value::Char(a), Value::Char(b)) => char_range(*a, *b, inclusive, config),
        _ => Err(EvalError::TypeError {
            message: format!(
                "range bounds must both be integers or chars, got {} and {}",
                type_name(&start),
                type_name(&end)
            ),
            span: Some(super::expr_span(start_expr)),
        }),
    }
}

fn int_range(start: i64, end: i64, inclusive: bool, config: &Config) -> Result<Value, EvalError> {
    let span = end as i128 - start as i128 + i128::from(inclusive);
    let len = span.max(0) as u128;
    check_len(len, config)?;

    let values = if inclusive {
        (start..=end).map(Value::Int).collect()
    } else {
        (start..end).map(Value::Int).collect()
    };
    Ok(Value::array(values))
}

fn char_range(
    start: char,
    end: char,
    inclusive: bool,
    config: &Config,
) -> Result<Value, EvalError> {
    let chars: Box<dyn Iterator<Item = char>> = if inclusive {
        Box::new(start..=end)
    } else {
        Box::new(start..end)
    };

    // Upper bound on code points, before skipping the surrogate gap
    let span = end as i64 - start as i64 + i64::from(inclusive);
    check_len(span.max(0) as u128, config)?;

    Ok(Value::array(chars.map(Value::Char).collect()))
}
