//! Regex formulation of the compound test.
//!
//! The dictionary becomes `\A(?:w1|w2|...){2,}\z` over escaped, non-empty
//! entries. Matching is automaton-based (no backtracking), so it answers
//! "is this word a concatenation of two or more entries" exactly, but it does
//! not say which entries. Use `compose` when the parts are needed.

use regex::{Regex, RegexBuilder};

use crate::char_len;
use crate::dictionary::Dictionary;
use crate::error::PatternError;

/// Compiled program size limit. `{2,}` repeats the alternation, so a word
/// list of a few hundred thousand entries needs far more than the default.
const SIZE_LIMIT: usize = 1 << 30;
/// Lazy DFA cache size.
const DFA_SIZE_LIMIT: usize = 1 << 28;

#[derive(Clone, Debug)]
pub struct CompoundPattern {
    /// `None` for a dictionary without non-empty entries (matches nothing).
    re: Option<Regex>,
    entries: usize,
}

impl CompoundPattern {
    pub fn new(dict: &Dictionary) -> Result<Self, PatternError> {
        let mut entries: Vec<&str> = dict.iter().filter(|w| !w.is_empty()).collect();
        if entries.is_empty() {
            return Ok(Self {
                re: None,
                entries: 0,
            });
        }
        // Alternation order does not change the matched language; sort so the
        // pattern text is reproducible.
        entries.sort_unstable();
        let alternation = entries
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!(r"\A(?:{alternation}){{2,}}\z");
        let re = RegexBuilder::new(&pattern)
            .size_limit(SIZE_LIMIT)
            .dfa_size_limit(DFA_SIZE_LIMIT)
            .build()
            .map_err(|e| match e {
                regex::Error::CompiledTooBig(_) => PatternError::TooLarge {
                    entries: entries.len(),
                },
                other => PatternError::Regex(other),
            })?;
        Ok(Self {
            re: Some(re),
            entries: entries.len(),
        })
    }

    /// Number of dictionary entries in the alternation.
    pub fn entries(&self) -> usize {
        self.entries
    }

    /// True when `word` is a concatenation of two or more entries.
    pub fn is_compound(&self, word: &str) -> bool {
        self.re.as_ref().is_some_and(|re| re.is_match(word))
    }

    /// Longest compound word in `words` with the scanner's pruning rule
    /// (strictly longer than the current best; first of equal length wins).
    pub fn longest_match<'w, S: AsRef<str>>(&self, words: &'w [S]) -> Option<(usize, &'w str)> {
        let mut best: Option<(usize, &'w str)> = None;
        let mut best_len = 0;
        for (index, w) in words.iter().enumerate() {
            let word = w.as_ref();
            let len = char_len(word);
            if len <= best_len || !self.is_compound(word) {
                continue;
            }
            best = Some((index, word));
            best_len = len;
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rand::{draw_word_list, ReplayToken, WordListCfg};

    fn pattern(words: &[&str]) -> CompoundPattern {
        CompoundPattern::new(&Dictionary::from_lines(words.iter().copied())).unwrap()
    }

    #[test]
    fn requires_two_or_more_entries() {
        let p = pattern(&["cat", "dog", "catdog"]);
        assert!(p.is_compound("catdog"));
        assert!(p.is_compound("dogcatdog"));
        assert!(!p.is_compound("cat"));
        assert!(!p.is_compound("catdo"));
        assert!(!p.is_compound(""));
    }

    #[test]
    fn metacharacters_are_escaped() {
        let p = pattern(&["a.b", "c+"]);
        assert!(p.is_compound("a.bc+"));
        assert!(!p.is_compound("axbc+"));
        assert!(!p.is_compound("a.bcc"));
    }

    #[test]
    fn empty_dictionary_matches_nothing() {
        let p = CompoundPattern::new(&Dictionary::default()).unwrap();
        assert_eq!(p.entries(), 0);
        assert!(!p.is_compound(""));
        assert!(!p.is_compound("anything"));
    }

    #[test]
    fn empty_entry_is_left_out() {
        let dict: Dictionary = ["", "x"].into_iter().collect();
        let p = CompoundPattern::new(&dict).unwrap();
        assert_eq!(p.entries(), 1);
        assert!(!p.is_compound("x"));
        assert!(p.is_compound("xx"));
    }

    #[test]
    fn large_synthetic_dictionary_builds() {
        let cfg = WordListCfg {
            base_words: 60_000,
            alphabet: 26,
            min_len: 3,
            max_len: 12,
            compounds: 15_000,
            max_parts: 3,
            trailing_blank: true,
        };
        let words = draw_word_list(cfg, ReplayToken { seed: 11, index: 0 });
        let dict = Dictionary::from_lines(&words);
        let p = CompoundPattern::new(&dict).expect("pattern builds");
        assert_eq!(p.entries(), dict.len());
        let mut compound = words.iter().find(|w| !w.is_empty()).unwrap().clone();
        compound.push_str(&compound.clone());
        assert!(p.is_compound(&compound));
    }

    #[test]
    #[ignore = "builds a ~260k-entry automaton; slow in debug builds"]
    fn full_size_word_list_builds() {
        let cfg = WordListCfg {
            base_words: 200_000,
            alphabet: 26,
            min_len: 3,
            max_len: 12,
            compounds: 60_000,
            max_parts: 3,
            trailing_blank: true,
        };
        let words = draw_word_list(cfg, ReplayToken { seed: 0, index: 0 });
        let dict = Dictionary::from_lines(&words);
        let p = CompoundPattern::new(&dict).expect("pattern builds");
        assert!(p.entries() > 250_000);
        assert!(p.longest_match(&words).is_some());
    }

    #[test]
    fn longest_match_follows_scan_order() {
        let words = ["a", "aa", "aaa", "ab", "b", "ba", "", "bab"];
        let p = pattern(&words);
        assert_eq!(p.longest_match(&words), Some((2, "aaa")));
        let none = ["single", ""];
        assert_eq!(pattern(&none).longest_match(&none), None);
    }
}
