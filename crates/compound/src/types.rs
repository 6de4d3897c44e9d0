//! Result types shared by `compose` and `scan`.
//!
//! Parts borrow from the word that was decomposed, so a `Decomposition` never
//! outlives the word list it came from.

use std::fmt;

/// Ordered parts whose concatenation equals the decomposed word.
///
/// Empty means "no decomposition found"; one part is the trivial whole-word
/// match; two or more parts make the word compound.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Decomposition<'w> {
    parts: Vec<&'w str>,
}

impl<'w> Decomposition<'w> {
    /// The "no decomposition" value.
    #[inline]
    pub fn none() -> Self {
        Self { parts: Vec::new() }
    }

    #[inline]
    pub fn from_parts(parts: Vec<&'w str>) -> Self {
        Self { parts }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Exactly one part (the word matched itself).
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.parts.len() == 1
    }

    /// Two or more parts.
    #[inline]
    pub fn is_compound(&self) -> bool {
        self.parts.len() >= 2
    }

    #[inline]
    pub fn parts(&self) -> &[&'w str] {
        &self.parts
    }

    pub fn iter(&self) -> impl Iterator<Item = &'w str> + '_ {
        self.parts.iter().copied()
    }

    /// Concatenation of all parts; equals the decomposed word when non-empty.
    pub fn concat(&self) -> String {
        self.parts.concat()
    }

    /// Owned copy of the parts (for reports that outlive the word list).
    pub fn to_owned_parts(&self) -> Vec<String> {
        self.parts.iter().map(|p| p.to_string()).collect()
    }
}

/// Renders as `"w1" + "w2" + ...`.
impl fmt::Display for Decomposition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "\"{part}\"")?;
        }
        Ok(())
    }
}

impl<'w> IntoIterator for Decomposition<'w> {
    type Item = &'w str;
    type IntoIter = std::vec::IntoIter<&'w str>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.into_iter()
    }
}

/// Best result of a scan: the word, its list position, and its decomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LongestCompound<'w> {
    pub word: &'w str,
    /// Position of `word` in the scanned list.
    pub index: usize,
    /// Length of `word` in characters.
    pub len: usize,
    pub parts: Decomposition<'w>,
}
