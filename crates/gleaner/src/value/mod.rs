//! Value representation for dynamically typed collection elements

mod arith;
mod display;
mod impls;

use std::sync::Arc;

/// Dynamically typed element of a parsed collection.
///
/// Primitives are stored inline; strings and arrays are `Arc`-wrapped so
/// cloning a value out of a collection stays cheap.
#[derive(Clone, PartialEq)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Inline Primitives
    // ═══════════════════════════════════════════════════════════════════
    /// Boolean: `true` or `false`
    Bool(bool),

    /// Unicode scalar value
    Char(char),

    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    // ═══════════════════════════════════════════════════════════════════
    // Heap-Allocated
    // ═══════════════════════════════════════════════════════════════════
    /// Heap-allocated string
    String(Arc<String>),

    /// Ordered sequence of values
    Array(Arc<Vec<Value>>),
}
