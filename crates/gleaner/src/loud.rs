//! Per-value behavior through composition
//!
//! Wrapping a string in [`Loud`] gives that one value an extra `shout`
//! method. Other strings are untouched, and the wrapper derefs to the inner
//! value so everything else still works.

use std::fmt;
use std::ops::Deref;

/// A text value that can shout itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Loud<S>(S);

impl<S: AsRef<str>> Loud<S> {
    /// Wrap a value.
    pub fn new(inner: S) -> Self {
        Self(inner)
    }

    /// Upper-cased copy of the text.
    pub fn shout(&self) -> String {
        self.0.as_ref().to_uppercase()
    }

    /// Unwrap the inner value.
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S> Deref for Loud<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S: fmt::Display> fmt::Display for Loud<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<S: AsRef<str>> From<S> for Loud<S> {
    fn from(inner: S) -> Self {
        Self(inner)
    }
}
