//! Seedless summation over any iterable collection
//!
//! [`sum`] folds a collection left to right with `+`, starting from its
//! first element. There is no identity element, so an empty collection is
//! an error rather than a silent zero.
//!
//! [`Summable`] attaches the same fold as a method to everything that is
//! `IntoIterator`: arrays, `Vec`, ranges, [`Vowels`](crate::Vowels) and
//! [`&VowelFinder`](crate::VowelFinder) alike.

use crate::error::SumError;
use crate::Value;

/// An element that can be folded with `+`.
///
/// `Total` is the accumulator type. It is `Self` for numbers and `String`
/// for text, since adding two chars produces a string.
pub trait Summand: Sized {
    /// Accumulator type
    type Total;

    /// Turn the first element into the starting accumulator.
    fn seed(self) -> Self::Total;

    /// Add the next element onto the accumulator.
    fn accumulate(total: Self::Total, item: Self) -> Result<Self::Total, SumError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Numeric Summands
// ═══════════════════════════════════════════════════════════════════════

macro_rules! checked_summand {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summand for $t {
                type Total = $t;

                fn seed(self) -> $t {
                    self
                }

                fn accumulate(total: $t, item: $t) -> Result<$t, SumError> {
                    total.checked_add(item).ok_or(SumError::IntegerOverflow)
                }
            }
        )*
    };
}

checked_summand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_summand {
    ($($t:ty),*) => {
        $(
            impl Summand for $t {
                type Total = $t;

                fn seed(self) -> $t {
                    self
                }

                fn accumulate(total: $t, item: $t) -> Result<$t, SumError> {
                    Ok(total + item)
                }
            }
        )*
    };
}

float_summand!(f32, f64);

// ═══════════════════════════════════════════════════════════════════════
// Text Summands
// ═══════════════════════════════════════════════════════════════════════

impl Summand for char {
    type Total = String;

    fn seed(self) -> String {
        self.to_string()
    }

    fn accumulate(mut total: String, item: char) -> Result<String, SumError> {
        total.push(item);
        Ok(total)
    }
}

impl Summand for &str {
    type Total = String;

    fn seed(self) -> String {
        self.to_string()
    }

    fn accumulate(mut total: String, item: Self) -> Result<String, SumError> {
        total.push_str(item);
        Ok(total)
    }
}

impl Summand for String {
    type Total = String;

    fn seed(self) -> String {
        self
    }

    fn accumulate(mut total: String, item: String) -> Result<String, SumError> {
        total.push_str(&item);
        Ok(total)
    }
}

impl Summand for Value {
    type Total = Value;

    fn seed(self) -> Value {
        self
    }

    fn accumulate(total: Value, item: Value) -> Result<Value, SumError> {
        total.plus(item)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Fold
// ═══════════════════════════════════════════════════════════════════════

/// Fold `items` left to right with `+`, seeded by the first element.
///
/// # Errors
///
/// Returns `EmptyCollection` when there are no elements, and propagates the
/// first error from [`Summand::accumulate`].
pub fn sum<I>(items: I) -> Result<<I::Item as Summand>::Total, SumError>
where
    I: IntoIterator,
    I::Item: Summand,
{
    let mut iter = items.into_iter();
    let first = iter.next().ok_or(SumError::EmptyCollection)?;

    let mut folded = 1usize;
    let total = iter.try_fold(first.seed(), |total, item| {
        folded += 1;
        <I::Item as Summand>::accumulate(total, item)
    });

    match &total {
        Ok(_) => tracing::trace!(folded, "summed collection"),
        Err(err) => tracing::debug!(folded, %err, "sum failed"),
    }
    total
}

/// Summation as a method on any iterable collection.
///
/// Blanket-implemented for every `IntoIterator`; nothing needs to opt in.
pub trait Summable: IntoIterator + Sized {
    /// Fold this collection with `+`. See [`sum`].
    fn total(self) -> Result<<Self::Item as Summand>::Total, SumError>
    where
        Self::Item: Summand,
    {
        sum(self)
    }
}

impl<I: IntoIterator> Summable for I {}
