//! Word composer: split a word into dictionary entries.
//!
//! Search order
//! - Prefixes are tried shortest first, on character boundaries, starting at
//!   one character. A zero-length prefix is never formed, so an empty
//!   dictionary entry can never take part in a parse.
//! - The first prefix that leads to a complete parse is accepted. No attempt
//!   is made to maximise or balance the parts.
//! - The whole word is the longest prefix, so a word that is itself an entry
//!   returns `[word]` only when no split into smaller entries exists.
//!
//! Both strategies share that order and return the same decomposition; the
//! memoized one additionally remembers suffix offsets that cannot be parsed.
//! The search keeps its frames on the heap (`search.rs`), so words that split
//! into hundreds of thousands of parts are fine.

mod search;

use crate::dictionary::Dictionary;
use crate::types::Decomposition;

/// Search strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain backtracking without memoization; exponential in the worst case.
    #[default]
    Backtrack,
    /// Same order, but a suffix offset that failed once is never re-parsed.
    Memoized,
}

/// Composer configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComposeCfg {
    pub strategy: Strategy,
}

impl ComposeCfg {
    pub fn new(strategy: Strategy) -> Self {
        Self { strategy }
    }
}

/// Decompose `word` into dictionary entries using plain backtracking.
///
/// Returns an empty decomposition when no parse exists. Never fails.
pub fn compose<'w>(dict: &Dictionary, word: &'w str) -> Decomposition<'w> {
    search::search(dict, word, false)
}

/// Decompose `word` with an explicit strategy.
pub fn compose_with<'w>(dict: &Dictionary, word: &'w str, cfg: ComposeCfg) -> Decomposition<'w> {
    match cfg.strategy {
        Strategy::Backtrack => search::search(dict, word, false),
        Strategy::Memoized => search::search(dict, word, true),
    }
}

/// Byte offsets where each non-empty prefix of `word` ends, ascending.
#[inline]
fn prefix_ends(word: &str) -> impl Iterator<Item = usize> + '_ {
    word.char_indices().map(|(i, c)| i + c.len_utf8())
}
