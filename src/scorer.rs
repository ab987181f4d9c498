//! Scoring candidates against targets and the self-score patch.

use std::collections::{BTreeMap, HashSet};

use indicatif::ProgressBar;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::CandidateFilter;
use crate::oracle::{to_percent, Oracle};
use crate::stats::RunStats;
use crate::targets::Target;

/// Score every target reaches against itself.
pub const PERFECT_SCORE: u8 = 100;
/// Progress is logged after this many scored words.
pub const REPORT_EVERY: u64 = 5_000;

/// Word to score vector, one entry per target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: BTreeMap<String, Vec<u8>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String, scores: Vec<u8>) {
        self.entries.insert(word, scores);
    }

    pub fn get(&self, word: &str) -> Option<&[u8]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(w, s)| (w.as_str(), s.as_slice()))
    }

    /// Force each target's own column to [`PERFECT_SCORE`].
    ///
    /// Targets absent from the table are inserted with an all-zero vector
    /// first. Scores of a target against other targets are left untouched.
    /// Returns how many targets were inserted.
    pub fn patch_targets(&mut self, targets: &[Target]) -> usize {
        let width = targets.len();
        let mut inserted = 0;
        for t in targets {
            let scores = self.entries.entry(t.key()).or_insert_with(|| {
                inserted += 1;
                vec![0; width]
            });
            if scores.len() < width {
                scores.resize(width, 0);
            }
            scores[t.index] = PERFECT_SCORE;
        }
        inserted
    }
}

/// Score vector for one normalized word, or `None` when the oracle has no
/// usable vector for it.
pub fn score_word<O: Oracle + ?Sized>(oracle: &O, word: &str, targets: &[Target]) -> Option<Vec<u8>> {
    if !oracle.has_vector(word) {
        return None;
    }
    Some(
        targets
            .iter()
            .map(|t| oracle.similarity(word, &t.text).map_or(0, to_percent))
            .collect(),
    )
}

/// Scan the raw word list in order and score every acceptable word.
///
/// Lines are trimmed and lowercased, then deduplicated and filtered by
/// length. When `max_words` is set, scanning stops once that many words have
/// been scored: the cap keeps the first words in source order, it is not a
/// relevance ranking.
pub fn score_candidates<O: Oracle + ?Sized>(
    oracle: &O,
    raw: &str,
    targets: &[Target],
    filter: CandidateFilter,
    max_words: Option<usize>,
    progress: &ProgressBar,
) -> (ScoreTable, RunStats) {
    let mut table = ScoreTable::new();
    let mut stats = RunStats::new();
    let mut seen: HashSet<String> = HashSet::new();

    for line in raw.lines() {
        if let Some(cap) = max_words {
            if stats.scored >= cap as u64 {
                stats.capped = true;
                break;
            }
        }
        stats.tick_line();
        progress.inc(1);

        let word = line.trim().to_lowercase();
        if word.is_empty() {
            stats.empty += 1;
            continue;
        }
        if seen.contains(&word) {
            stats.duplicates += 1;
            continue;
        }
        if !filter.accepts(&word) {
            if word.chars().count() < filter.min_len {
                stats.too_short += 1;
            } else {
                stats.too_long += 1;
            }
            continue;
        }
        seen.insert(word.clone());

        match score_word(oracle, &word, targets) {
            Some(scores) => {
                table.insert(word, scores);
                stats.log_scored();
                if stats.scored % REPORT_EVERY == 0 {
                    info!("processed {} valid words", stats.scored);
                    progress.set_message(format!("{} scored", stats.scored));
                }
            }
            None => stats.no_vector += 1,
        }
    }

    (table, stats)
}
