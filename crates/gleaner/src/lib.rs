//! # Gleaner
//!
//! Lazy vowel extraction and seedless summation over any iterable.
//!
//! Two independent pieces that happen to compose:
//!
//! - **Extraction**: [`extract_vowels`] yields the vowels of a string, in
//!   order, without allocating. [`VowelFinder`] pairs a string with a
//!   [`VowelSet`] and can be iterated any number of times.
//! - **Summation**: [`sum`] and the blanket [`Summable`] trait fold any
//!   `IntoIterator` with `+`, seeded by the first element. Empty input is an
//!   error, never a silent zero.
//!
//! ```text
//! extract_vowels("the quick brown for jumped").total()  →  Ok("euiooue")
//! ```
//!
//! ## Supporting modules
//!
//! - [`value`]: dynamically typed values, so user input can be summed
//! - [`eval`]: collection literals (`[1, 2]`, `'a'..='m'`) parsed with `syn`
//! - [`loud`]: per-value behavior by wrapping, not by patching types
//! - [`context`]: configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod loud;
pub mod sum;
pub mod value;
pub mod vowels;

// Re-export main types
pub use context::Config;
pub use error::{ConfigError, EvalError, SumError};
pub use eval::{eval_str, parse_collection, Evaluate};
pub use loud::Loud;
pub use sum::{sum, Summable, Summand};
pub use value::Value;
pub use vowels::{extract_vowels, VowelFinder, VowelSet, Vowels, VOWELS};

/// Gleaner version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_extracted_vowels_are_summable() {
        let total = extract_vowels("the quick brown for jumped").total();
        assert_eq!(total, Ok("euiooue".to_string()));
    }
}
