//! Core logic for precomputing word similarity tables for the guessing game.
//!
//! Every word of a dictionary is scored against one or more target words
//! with an embedding [`Oracle`]. The result is a word to score-vector table,
//! written once as JSON (pair variant) or as a script assignment that also
//! carries the secret sentence structure (sentence variant).

pub mod annotate;
pub mod config;
pub mod error;
pub mod io_utils;
pub mod logging;
pub mod oracle;
pub mod output;
pub mod pipeline;
pub mod scorer;
pub mod source;
pub mod stats;
pub mod stop_words;
pub mod targets;
pub mod vectors;

pub use annotate::{Annotator, LexiconAnnotator, PosTag, Token};
pub use config::{CandidateFilter, FetchOptions, PairConfig, SentenceConfig, WordListLocation};
pub use error::TableError;
pub use oracle::{cosine_similarity, to_percent, Oracle};
pub use output::{
    load_payload, parse_payload, render_pair_table, render_sentence_payload, write_output,
    GameData, Payload,
};
pub use pipeline::{build_pair_table, build_sentence_table, Build, RunSummary};
pub use scorer::{score_candidates, score_word, ScoreTable, PERFECT_SCORE};
pub use source::{source_for, FileSource, HttpSource, TextSource, WordSource};
pub use stats::RunStats;
pub use targets::{extract_targets, pair_targets, EntryKind, StructureEntry, Target};
pub use vectors::WordVectors;
