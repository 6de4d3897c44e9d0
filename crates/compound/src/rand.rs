//! Seeded synthetic word lists.
//!
//! Model
//! - Draw `base_words` random words over the first `alphabet` lowercase letters
//!   with lengths in `[min_len, max_len]`.
//! - Add `compounds` words, each the concatenation of 2..=`max_parts` base
//!   words picked uniformly (repeats allowed).
//! - Shuffle, then optionally append an empty line (as a file with a trailing
//!   newline would produce).
//!
//! A `ReplayToken` fixes the draw, so benches and tests see the same list
//! every run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Synthetic word-list configuration.
#[derive(Clone, Copy, Debug)]
pub struct WordListCfg {
    pub base_words: usize,
    /// Letters used, taken from `'a'` upward. Clamped to [1, 26].
    pub alphabet: u8,
    pub min_len: usize,
    pub max_len: usize,
    pub compounds: usize,
    /// Upper bound on parts per compound. Clamped to at least 2.
    pub max_parts: usize,
    pub trailing_blank: bool,
}
impl Default for WordListCfg {
    fn default() -> Self {
        Self {
            base_words: 200,
            alphabet: 4,
            min_len: 1,
            max_len: 6,
            compounds: 40,
            max_parts: 4,
            trailing_blank: true,
        }
    }
}

/// Identifies one synthetic list: `seed` picks a family, `index` a member of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    /// Both fields are folded through a SplitMix64 finalizer so neighbouring
    /// indices give unrelated lists.
    fn rng(self) -> StdRng {
        const GOLDEN: u64 = 0x9e3779b97f4a7c15;
        let splitmix = |mut z: u64| {
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            z ^ (z >> 31)
        };
        StdRng::seed_from_u64(splitmix(self.seed ^ splitmix(self.index.wrapping_add(GOLDEN))))
    }
}

/// Draw a word list. Identical `(cfg, tok)` pairs give identical lists.
pub fn draw_word_list(cfg: WordListCfg, tok: ReplayToken) -> Vec<String> {
    let mut rng = tok.rng();
    let alphabet = cfg.alphabet.clamp(1, 26);
    let lo = cfg.min_len.max(1);
    let hi = cfg.max_len.max(lo);

    let base: Vec<String> = (0..cfg.base_words)
        .map(|_| {
            let len = rng.gen_range(lo..=hi);
            (0..len)
                .map(|_| char::from(b'a' + rng.gen_range(0..alphabet)))
                .collect()
        })
        .collect();

    let mut words = base.clone();
    if !base.is_empty() {
        let max_parts = cfg.max_parts.max(2);
        for _ in 0..cfg.compounds {
            let k = rng.gen_range(2..=max_parts);
            let compound: String = (0..k)
                .map(|_| base[rng.gen_range(0..base.len())].as_str())
                .collect();
            words.push(compound);
        }
    }
    words.shuffle(&mut rng);
    if cfg.trailing_blank {
        words.push(String::new());
    }
    words
}
