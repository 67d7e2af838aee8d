//! Lazy vowel extraction
//!
//! [`extract_vowels`] scans a string left to right and yields each character
//! that belongs to a [`VowelSet`]. Every character is consulted exactly once,
//! order is preserved, and nothing is allocated.
//!
//! ```text
//! "the quick brown for jumped"  →  e u i o o u e
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::str::Chars;

use crate::error::ConfigError;

/// The default vowel set.
pub const VOWELS: &str = "aeiou";

/// Set of ASCII characters treated as vowels.
///
/// Stored as a 128-bit mask so the set is `Copy` and membership is a shift
/// and a test.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelSet {
    mask: u128,
}

impl VowelSet {
    /// Build a set from the characters of `members`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidVowel` for the first non-ASCII character.
    pub fn from_chars(members: &str) -> Result<Self, ConfigError> {
        let mut mask = 0u128;
        for c in members.chars() {
            if !c.is_ascii() {
                return Err(ConfigError::InvalidVowel(c));
            }
            mask |= 1u128 << (c as u32);
        }
        Ok(Self { mask })
    }

    /// Widen the set so both cases of every letter match.
    pub fn case_insensitive(self) -> Self {
        let mut mask = self.mask;
        for byte in 0u8..128 {
            if self.mask & (1u128 << byte) != 0 {
                mask |= 1u128 << byte.to_ascii_lowercase();
                mask |= 1u128 << byte.to_ascii_uppercase();
            }
        }
        Self { mask }
    }

    /// Check membership.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.mask & (1u128 << (c as u32)) != 0
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// True when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Members in ascending code-point order.
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |b| self.mask & (1u128 << *b) != 0)
            .map(char::from)
    }
}

impl Default for VowelSet {
    fn default() -> Self {
        // a, e, i, o, u
        Self {
            mask: (1u128 << b'a')
                | (1u128 << b'e')
                | (1u128 << b'i')
                | (1u128 << b'o')
                | (1u128 << b'u'),
        }
    }
}

impl fmt::Debug for VowelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.members()).finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Iterator
// ═══════════════════════════════════════════════════════════════════════

/// Lazy iterator over the vowels of a string.
#[derive(Clone, Debug)]
pub struct Vowels<'a> {
    chars: Chars<'a>,
    set: VowelSet,
}

impl<'a> Vowels<'a> {
    /// Iterate over the members of `set` found in `input`.
    pub fn with_set(input: &'a str, set: VowelSet) -> Self {
        Self {
            chars: input.chars(),
            set,
        }
    }
}

impl Iterator for Vowels<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let set = self.set;
        self.chars.find(|c| set.contains(*c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.chars.size_hint().1)
    }
}

impl DoubleEndedIterator for Vowels<'_> {
    fn next_back(&mut self) -> Option<char> {
        let set = self.set;
        self.chars.rfind(|c| set.contains(*c))
    }
}

impl FusedIterator for Vowels<'_> {}

/// Extract the vowels `a, e, i, o, u` from `input`, in order.
///
/// Case is matched as written. Never fails; a string with no vowels yields
/// an empty iterator.
pub fn extract_vowels(input: &str) -> Vowels<'_> {
    Vowels::with_set(input, VowelSet::default())
}

// ═══════════════════════════════════════════════════════════════════════
// Finder
// ═══════════════════════════════════════════════════════════════════════

/// A string paired with the vowel set to look for.
///
/// Each call to [`iter`](Self::iter) restarts the scan, and `&VowelFinder`
/// is `IntoIterator`, so a finder can be fed straight into
/// [`Summable::total`](crate::Summable::total).
#[derive(Clone, Debug)]
pub struct VowelFinder<'a> {
    text: &'a str,
    set: VowelSet,
}

impl<'a> VowelFinder<'a> {
    /// Finder over the default vowel set.
    pub fn new(text: &'a str) -> Self {
        Self::with_set(text, VowelSet::default())
    }

    /// Finder over a custom vowel set.
    pub fn with_set(text: &'a str, set: VowelSet) -> Self {
        Self { text, set }
    }

    /// The scanned text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The vowel set in use.
    pub fn set(&self) -> VowelSet {
        self.set
    }

    /// Fresh iterator from the start of the text.
    pub fn iter(&self) -> Vowels<'a> {
        Vowels::with_set(self.text, self.set)
    }

    /// Number of vowels in the text.
    pub fn count(&self) -> usize {
        self.iter().count()
    }
}

impl<'a> IntoIterator for &VowelFinder<'a> {
    type Item = char;
    type IntoIter = Vowels<'a>;

    fn into_iter(self) -> Vowels<'a> {
        self.iter()
    }
}
