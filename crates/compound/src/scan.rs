//! Longest compound word over a word list.
//!
//! Rules
//! - Words are visited in list order. A word whose length does not exceed the
//!   current best is skipped without composing it, so among several words of
//!   the maximal qualifying length the first one in the list wins.
//! - A candidate is adopted when its decomposition has at least two parts.
//!
//! The sequential scan is a fold over an explicit `Option<LongestCompound>`
//! accumulator. The parallel scan reduces per-word results by (longer, then
//! earlier in the list), which selects the same word; a shared best-length
//! hint only prunes strictly shorter words.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::char_len;
use crate::compose::{compose_with, ComposeCfg};
use crate::dictionary::Dictionary;
use crate::types::LongestCompound;

/// Scan configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanCfg {
    pub compose: ComposeCfg,
    /// Spread candidates over the rayon pool.
    pub parallel: bool,
}

/// Counters collected during a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Words in the input list (blank lines included).
    pub words: usize,
    /// Words that survived length pruning and were composed.
    pub composed: usize,
    /// Composed words that turned out compound. For the sequential scan this
    /// is the number of times the best result changed.
    pub qualifying: usize,
}

/// Longest compound word of `words` with the default configuration.
pub fn scan<'w, S>(words: &'w [S], dict: &Dictionary) -> Option<LongestCompound<'w>>
where
    S: AsRef<str> + Sync,
{
    scan_with(words, dict, ScanCfg::default())
}

pub fn scan_with<'w, S>(words: &'w [S], dict: &Dictionary, cfg: ScanCfg) -> Option<LongestCompound<'w>>
where
    S: AsRef<str> + Sync,
{
    scan_with_stats(words, dict, cfg).0
}

/// Scan and also report counters.
pub fn scan_with_stats<'w, S>(
    words: &'w [S],
    dict: &Dictionary,
    cfg: ScanCfg,
) -> (Option<LongestCompound<'w>>, ScanStats)
where
    S: AsRef<str> + Sync,
{
    if cfg.parallel {
        scan_parallel(words, dict, cfg.compose)
    } else {
        scan_sequential(words, dict, cfg.compose)
    }
}

fn scan_sequential<'w, S>(
    words: &'w [S],
    dict: &Dictionary,
    cfg: ComposeCfg,
) -> (Option<LongestCompound<'w>>, ScanStats)
where
    S: AsRef<str>,
{
    let mut stats = ScanStats {
        words: words.len(),
        ..ScanStats::default()
    };
    let best = words
        .iter()
        .enumerate()
        .fold(None, |best: Option<LongestCompound<'w>>, (index, w)| {
            let word = w.as_ref();
            let len = char_len(word);
            if len <= best.as_ref().map_or(0, |b| b.len) {
                return best;
            }
            stats.composed += 1;
            let parts = compose_with(dict, word, cfg);
            if !parts.is_compound() {
                return best;
            }
            stats.qualifying += 1;
            debug!(word, index, len, parts = parts.len(), "new longest compound");
            Some(LongestCompound {
                word,
                index,
                len,
                parts,
            })
        });
    (best, stats)
}

fn scan_parallel<'w, S>(
    words: &'w [S],
    dict: &Dictionary,
    cfg: ComposeCfg,
) -> (Option<LongestCompound<'w>>, ScanStats)
where
    S: AsRef<str> + Sync,
{
    let best_len = AtomicUsize::new(0);
    let composed = AtomicUsize::new(0);
    let qualifying = AtomicUsize::new(0);
    let best = words
        .par_iter()
        .enumerate()
        .filter_map(|(index, w)| {
            let word = w.as_ref();
            let len = char_len(word);
            // Equal length must still be composed: an earlier index may win the tie.
            if len == 0 || len < best_len.load(Ordering::Relaxed) {
                return None;
            }
            composed.fetch_add(1, Ordering::Relaxed);
            let parts = compose_with(dict, word, cfg);
            if !parts.is_compound() {
                return None;
            }
            qualifying.fetch_add(1, Ordering::Relaxed);
            best_len.fetch_max(len, Ordering::Relaxed);
            Some(LongestCompound {
                word,
                index,
                len,
                parts,
            })
        })
        .reduce_with(prefer);
    if let Some(b) = &best {
        debug!(word = b.word, index = b.index, len = b.len, "parallel scan winner");
    }
    let stats = ScanStats {
        words: words.len(),
        composed: composed.into_inner(),
        qualifying: qualifying.into_inner(),
    };
    (best, stats)
}

/// Longer wins; on equal length the earlier list position wins.
fn prefer<'w>(a: LongestCompound<'w>, b: LongestCompound<'w>) -> LongestCompound<'w> {
    if b.len > a.len || (b.len == a.len && b.index < a.index) {
        b
    } else {
        a
    }
}
