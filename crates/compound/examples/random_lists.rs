//! Longest compound word on a few seeded synthetic lists.
//!
//! Prints, per draw, the winner and the time taken by each strategy so the
//! backtracking/memoized gap can be eyeballed without running criterion.

use std::time::Instant;

use compound::rand::{draw_word_list, ReplayToken, WordListCfg};
use compound::{scan_with_stats, ComposeCfg, Dictionary, ScanCfg, Strategy};

fn main() {
    let cfg = WordListCfg {
        base_words: 2_000,
        compounds: 500,
        max_parts: 5,
        ..WordListCfg::default()
    };
    for index in 0..3 {
        let words = draw_word_list(cfg, ReplayToken { seed: 2016, index });
        let dict = Dictionary::from_lines(&words);
        for strategy in [Strategy::Backtrack, Strategy::Memoized] {
            let scfg = ScanCfg {
                compose: ComposeCfg::new(strategy),
                parallel: false,
            };
            let start = Instant::now();
            let (best, stats) = scan_with_stats(&words, &dict, scfg);
            let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
            match best {
                Some(b) => println!(
                    "draw={index} strategy={strategy:?} word={} parts={} composed={} time_ms={elapsed_ms:.3}",
                    b.word,
                    b.parts.len(),
                    stats.composed
                ),
                None => println!("draw={index} strategy={strategy:?} word=<none> time_ms={elapsed_ms:.3}"),
            }
        }
    }
}
