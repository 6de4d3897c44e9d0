//! Compound-word search over a word list.
//!
//! A word is *compound* when it can be written as a concatenation of two or
//! more entries of the same list. The crate is split the way the pipeline runs:
//!
//! - `wordlist`: read a file and split it into lines.
//! - `dictionary`: exact-match word set built from those lines.
//! - `compose`: prefix search with backtracking (shortest prefix first).
//! - `scan`: longest compound word over the original list order.
//! - `pattern`: regex formulation of the compound test (existence only).
//! - `rand`: seeded synthetic word lists for benches and property tests.
//!
//! Contract between layers
//! - `compose` returns any parse with at least one part, including the trivial
//!   whole-word match; only `scan` (and the pattern's `{2,}`) require two parts.

pub mod compose;
pub mod dictionary;
pub mod error;
pub mod pattern;
pub mod rand;
pub mod scan;
pub mod types;
pub mod wordlist;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use compose::{compose, compose_with, ComposeCfg, Strategy};
pub use dictionary::Dictionary;
pub use error::{PatternError, WordListError};
pub use pattern::CompoundPattern;
pub use scan::{scan, scan_with, scan_with_stats, ScanCfg, ScanStats};
pub use types::{Decomposition, LongestCompound};
pub use wordlist::{read_word_list, split_lines};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compose::{compose, compose_with, ComposeCfg, Strategy};
    pub use crate::dictionary::Dictionary;
    pub use crate::pattern::CompoundPattern;
    pub use crate::scan::{scan, scan_with, ScanCfg};
    pub use crate::types::{Decomposition, LongestCompound};
    pub use crate::wordlist::{read_word_list, split_lines};
}

/// Number of characters in `word` (Unicode scalar values, not bytes).
#[inline]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}
