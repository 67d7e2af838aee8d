//! Collection literal evaluation
//!
//! Turns source text such as `[1, 2, 3, 4]`, `'a'..='m'` or `vec![0.5; 3]`
//! into a list of [`Value`]s that can be summed. The text is parsed as a
//! Rust expression with `syn`; only the literal subset below is evaluated.
//!
//! | Expression           | Result                        |
//! |----------------------|-------------------------------|
//! | `[a, b, c]`          | the elements                  |
//! | `[x; n]`, `vec![..]` | the elements                  |
//! | `a..b`, `a..=b`      | integers or chars, expanded   |
//! | literal, `-literal`  | a single element              |

pub mod array;
pub mod literal;
pub mod range;
pub mod unary;

use crate::{Config, EvalError, Value};

/// Trait for evaluating expression nodes to values.
pub trait Evaluate {
    /// Evaluate this node under the given config.
    fn eval(&self, config: &Config) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for syn::Expr {
    fn eval(&self, config: &Config) -> Result<Value, EvalError> {
        match self {
            syn::Expr::Lit(expr) => literal::eval_lit(&expr.lit),
            syn::Expr::Unary(expr) => expr.eval(config),
            syn::Expr::Array(expr) => array::eval_array(expr, config),
            syn::Expr::Repeat(expr) => array::eval_array_repeat(expr, config),
            syn::Expr::Macro(expr) => array::eval_vec_macro(&expr.mac, config),
            syn::Expr::Range(expr) => range::eval_range(expr, config),

            // Parenthesized and group expressions - just unwrap
            syn::Expr::Paren(expr) => expr.expr.eval(config),
            syn::Expr::Group(expr) => expr.expr.eval(config),

            _ => Err(EvalError::UnsupportedExpr {
                kind: expr_kind_name(self).to_string(),
                span: Some(expr_span(self)),
            }),
        }
    }
}

/// Get a human-readable name for an expression kind.
fn expr_kind_name(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Assign(_) => "assignment",
        syn::Expr::Binary(_) => "binary operation",
        syn::Expr::Block(_) => "block",
        syn::Expr::Call(_) => "function call",
        syn::Expr::Cast(_) => "cast",
        syn::Expr::Closure(_) => "closure",
        syn::Expr::Field(_) => "field access",
        syn::Expr::If(_) => "if",
        syn::Expr::Index(_) => "index",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Path(_) => "path",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Struct(_) => "struct literal",
        syn::Expr::Tuple(_) => "tuple",
        _ => "expression",
    }
}

/// Get the span of an expression.
pub(crate) fn expr_span(expr: &syn::Expr) -> proc_macro2::Span {
    use quote::ToTokens;
    expr.to_token_stream()
        .into_iter()
        .next()
        .map(|t| t.span())
        .unwrap_or_else(proc_macro2::Span::call_site)
}

/// Fail if a literal would hold more than `max_items` values.
///
/// `len` counts values after nested arrays are flattened, so nesting cannot
/// multiply past the limit.
pub(crate) fn check_len(len: u128, config: &Config) -> Result<(), EvalError> {
    if len > config.max_items as u128 {
        return Err(EvalError::RangeTooLarge {
            len,
            limit: config.max_items,
        });
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Parse and evaluate a single expression.
pub fn eval_str(src: &str, config: &Config) -> Result<Value, EvalError> {
    let expr: syn::Expr = syn::parse_str(src)?;
    expr.eval(config)
}

/// Parse a collection literal into its elements.
///
/// Arrays, repeats and ranges yield their elements; any other literal is a
/// one-element collection.
pub fn parse_collection(src: &str, config: &Config) -> Result<Vec<Value>, EvalError> {
    let items = match eval_str(src, config)? {
        Value::Array(items) => std::sync::Arc::unwrap_or_clone(items),
        single => vec![single],
    };
    tracing::debug!(src, len = items.len(), "parsed collection");
    Ok(items)
}
