//! Prefix search with backtracking on an explicit frame stack.
//!
//! One frame per part in progress, so the depth of the search is bounded by
//! heap memory rather than by the thread's stack. With `memoize`, suffix
//! offsets that failed once are recorded and skipped; only failures are
//! recorded, so the visiting order (and thus the returned parts) is the same
//! with and without the memo.

use super::prefix_ends;
use crate::dictionary::Dictionary;
use crate::types::Decomposition;

/// Suffix starting at `start`; `tried` is the end of the last prefix visited.
struct Frame {
    start: usize,
    tried: usize,
}

pub(super) fn search<'w>(dict: &Dictionary, word: &'w str, memoize: bool) -> Decomposition<'w> {
    // `dead[i]`: the suffix starting at byte offset `i` has no parse.
    let mut dead = memoize.then(|| vec![false; word.len() + 1]);
    let mut frames = vec![Frame { start: 0, tried: 0 }];
    // `parts[k]` is the prefix that opened `frames[k + 1]`.
    let mut parts: Vec<&'w str> = Vec::new();

    while let Some(frame) = frames.last_mut() {
        let start = frame.start;
        match next_prefix_end(dict, word, start, frame.tried) {
            Some(end) => {
                frame.tried = end;
                parts.push(&word[start..end]);
                if end == word.len() {
                    return Decomposition::from_parts(parts);
                }
                if dead.as_ref().is_some_and(|d| d[end]) {
                    parts.pop();
                    continue;
                }
                frames.push(Frame {
                    start: end,
                    tried: end,
                });
            }
            None => {
                if let Some(d) = dead.as_mut() {
                    d[start] = true;
                }
                frames.pop();
                // Backtrack: the prefix that led here did not work out.
                parts.pop();
            }
        }
    }
    Decomposition::none()
}

/// End of the next dictionary prefix of `word[start..]` that is longer than
/// `word[start..tried]`.
fn next_prefix_end(dict: &Dictionary, word: &str, start: usize, tried: usize) -> Option<usize> {
    prefix_ends(&word[tried..])
        .map(|end| tried + end)
        .find(|&end| dict.contains(&word[start..end]))
}
