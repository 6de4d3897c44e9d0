use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use compound::{
    read_word_list, scan_with_stats, ComposeCfg, CompoundPattern, Dictionary, ScanCfg, Strategy,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod report;

use report::Report;

const USAGE: &str = "Usage: words <input_file_of_words>";

#[derive(Parser)]
#[command(name = "words", version)]
#[command(about = "Find the longest word that is a concatenation of other words in the list")]
struct Cmd {
    /// Word list, one word per line
    input: PathBuf,

    /// Search used to decompose candidates
    #[arg(long, value_enum, default_value_t = StrategyArg::Backtrack)]
    strategy: StrategyArg,

    /// Compose candidates on all cores
    #[arg(long)]
    parallel: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Log to stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    /// Prefix search with backtracking
    Backtrack,
    /// Backtracking that remembers dead suffixes
    Memoized,
    /// Regex match; reports the word but not its parts
    Pattern,
}

impl StrategyArg {
    fn name(self) -> &'static str {
        match self {
            StrategyArg::Backtrack => "backtrack",
            StrategyArg::Memoized => "memoized",
            StrategyArg::Pattern => "pattern",
        }
    }
}

fn main() -> Result<ExitCode> {
    let cmd = match Cmd::try_parse() {
        Ok(cmd) => cmd,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            return Ok(ExitCode::FAILURE);
        }
    };
    init_tracing(cmd.verbose);

    let report = run(&cmd)?;
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(if report.word.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // stdout carries the result lines only.
    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cmd: &Cmd) -> Result<Report> {
    let input = cmd.input.display().to_string();
    tracing::info!(input, strategy = cmd.strategy.name(), parallel = cmd.parallel, "run");

    let words = read_word_list(&cmd.input).context("loading word list")?;
    let dict = Dictionary::from_lines(&words);
    tracing::info!(words = words.len(), entries = dict.len(), "dictionary built");

    let mut report = Report::new(input, cmd.strategy.name(), cmd.parallel, words.len(), dict.len());
    let strategy = match cmd.strategy {
        StrategyArg::Pattern => {
            if cmd.parallel {
                tracing::warn!("--parallel has no effect with --strategy pattern");
            }
            let pattern = CompoundPattern::new(&dict).context("building dictionary pattern")?;
            if let Some((index, word)) = pattern.longest_match(&words) {
                tracing::info!(word, index, "longest match");
                report.word = Some(word.to_string());
            }
            return Ok(report);
        }
        StrategyArg::Backtrack => Strategy::Backtrack,
        StrategyArg::Memoized => Strategy::Memoized,
    };

    let cfg = ScanCfg {
        compose: ComposeCfg::new(strategy),
        parallel: cmd.parallel,
    };
    let (best, stats) = scan_with_stats(&words, &dict, cfg);
    tracing::info!(
        composed = stats.composed,
        qualifying = stats.qualifying,
        "scan finished"
    );
    if let Some(best) = best {
        report.word = Some(best.word.to_string());
        report.parts = best.parts.to_owned_parts();
    }
    Ok(report)
}
