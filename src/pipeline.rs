//! The two table builds wired end to end.
//!
//! Each build is one linear pass: targets, word list, scoring, self-score
//! patch. Writing the file is left to the caller so nothing touches disk
//! until the whole table exists.

use std::path::PathBuf;

use indicatif::ProgressBar;
use serde::Serialize;
use tracing::info;

use crate::annotate::Annotator;
use crate::config::{CandidateFilter, PairConfig, SentenceConfig};
use crate::error::Result;
use crate::oracle::Oracle;
use crate::output::GameData;
use crate::scorer::{score_candidates, ScoreTable};
use crate::source::WordSource;
use crate::stats::RunStats;
use crate::targets::{extract_targets, pair_targets, warn_missing_vectors, Target};

/// Result of one build, before serialization.
pub struct Build<T> {
    pub data: T,
    pub targets: Vec<Target>,
    pub stats: RunStats,
}

/// Machine readable report printed with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub variant: &'static str,
    pub targets: Vec<String>,
    pub raw_words: u64,
    pub scored_words: u64,
    pub table_size: usize,
    pub capped: bool,
    pub missing_target_vectors: u64,
    pub output: PathBuf,
    pub output_bytes: u64,
    pub elapsed_ms: u128,
}

fn scan<O: Oracle + ?Sized, S: WordSource + ?Sized>(
    oracle: &O,
    source: &S,
    targets: &[Target],
    filter: CandidateFilter,
    max_words: Option<usize>,
    progress: &ProgressBar,
) -> Result<(ScoreTable, RunStats)> {
    let missing = warn_missing_vectors(oracle, targets);

    let raw = source.fetch()?;
    let line_count = raw.lines().count() as u64;
    info!("downloaded {} raw words from {}", line_count, source.describe());
    progress.set_length(line_count);

    let (mut table, mut stats) =
        score_candidates(oracle, &raw, targets, filter, max_words, progress);
    progress.finish_and_clear();

    stats.inserted_targets = table.patch_targets(targets) as u64;
    stats.missing_target_vectors = missing as u64;
    stats.report();
    Ok((table, stats))
}

/// Two (or more) literal targets, plain word to scores map.
pub fn build_pair_table<O: Oracle + ?Sized, S: WordSource + ?Sized>(
    oracle: &O,
    source: &S,
    config: &PairConfig,
    progress: &ProgressBar,
) -> Result<Build<ScoreTable>> {
    config.validate()?;
    let targets = pair_targets(&config.targets);
    info!(
        "targets: {}",
        targets.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(", ")
    );
    let (table, stats) = scan(oracle, source, &targets, config.filter, None, progress)?;
    Ok(Build {
        data: table,
        targets,
        stats,
    })
}

/// Targets taken from the secret sentence, table plus sentence structure.
pub fn build_sentence_table<O, A, S>(
    oracle: &O,
    annotator: &A,
    source: &S,
    config: &SentenceConfig,
    progress: &ProgressBar,
) -> Result<Build<GameData>>
where
    O: Oracle + ?Sized,
    A: Annotator + ?Sized,
    S: WordSource + ?Sized,
{
    config.validate()?;
    info!("analyzing sentence: '{}'", config.sentence);
    let (targets, structure) = extract_targets(annotator, &config.sentence)?;
    info!("{} targets, {} tokens", targets.len(), structure.len());

    let (dictionary, stats) = scan(
        oracle,
        source,
        &targets,
        config.filter,
        config.max_words,
        progress,
    )?;
    Ok(Build {
        data: GameData {
            structure,
            dictionary,
        },
        targets,
        stats,
    })
}
