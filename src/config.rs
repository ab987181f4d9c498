use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, TableError};

/// Default targets for the two-word table.
pub const PAIR_TARGETS: [&str; 2] = ["heated", "blanket"];
/// Roughly 10k common English words.
pub const PAIR_WORD_LIST_URL: &str = "https://raw.githubusercontent.com/first20hours/google-10000-english/master/google-10000-english-no-swears.txt";
pub const PAIR_OUTPUT: &str = "words.json";

pub const SECRET_SENTENCE: &str = "My beloved koala, since your otter cannot always be nearby to radiate sufficient body heat during this frigid Christmas, please use this substitute to stay toasty: heated blanket !";
/// Roughly 370k English words, many without vectors.
pub const SENTENCE_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";
pub const SENTENCE_OUTPUT: &str = "words.js";
/// Keeps the generated file small enough for mobile clients.
pub const MAX_SCORED_WORDS: usize = 600_000;
pub const GLOBAL_NAME: &str = "window.GAME_DATA";

/// Maximum tile count on the game board.
pub const MAX_WORD_LEN: usize = 10;
pub const VECTORS_FILE: &str = "vectors.txt";

/// Length bounds applied to every candidate, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateFilter {
    pub min_len: usize,
    pub max_len: usize,
}

impl CandidateFilter {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_len == 0 {
            return Err(TableError::Config("minimum word length must be at least 1".into()));
        }
        if self.min_len > self.max_len {
            return Err(TableError::Config(format!(
                "minimum word length {} exceeds maximum {}",
                self.min_len, self.max_len
            )));
        }
        Ok(())
    }

    pub fn accepts(&self, word: &str) -> bool {
        let len = word.chars().count();
        len >= self.min_len && len <= self.max_len
    }
}

/// Where the candidate list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListLocation {
    Url(String),
    File(PathBuf),
}

/// How the word list download behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// No timeout when `None`.
    pub timeout: Option<Duration>,
    pub use_system_proxy: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            use_system_proxy: true,
        }
    }
}

/// Parameters for the two-target table.
#[derive(Debug, Clone)]
pub struct PairConfig {
    pub targets: Vec<String>,
    pub word_list: WordListLocation,
    pub vectors: PathBuf,
    pub output: PathBuf,
    pub filter: CandidateFilter,
    pub fetch: FetchOptions,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            targets: PAIR_TARGETS.iter().map(|t| t.to_string()).collect(),
            word_list: WordListLocation::Url(PAIR_WORD_LIST_URL.to_string()),
            vectors: PathBuf::from(VECTORS_FILE),
            output: PathBuf::from(PAIR_OUTPUT),
            // only empty lines are rejected at the low end
            filter: CandidateFilter::new(1, MAX_WORD_LEN),
            fetch: FetchOptions::default(),
        }
    }
}

impl PairConfig {
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(TableError::Config("at least one target word is required".into()));
        }
        if self.targets.iter().any(|t| t.trim().is_empty()) {
            return Err(TableError::Config("target words must not be empty".into()));
        }
        self.filter.validate()
    }
}

/// Parameters for the sentence table.
#[derive(Debug, Clone)]
pub struct SentenceConfig {
    pub sentence: String,
    pub word_list: WordListLocation,
    pub vectors: PathBuf,
    pub pos_lexicon: Option<PathBuf>,
    pub output: PathBuf,
    pub filter: CandidateFilter,
    /// Stop after this many successfully scored words, in source order.
    pub max_words: Option<usize>,
    pub global_name: String,
    pub fetch: FetchOptions,
}

impl Default for SentenceConfig {
    fn default() -> Self {
        Self {
            sentence: SECRET_SENTENCE.to_string(),
            word_list: WordListLocation::Url(SENTENCE_WORD_LIST_URL.to_string()),
            vectors: PathBuf::from(VECTORS_FILE),
            pos_lexicon: None,
            output: PathBuf::from(SENTENCE_OUTPUT),
            filter: CandidateFilter::new(2, MAX_WORD_LEN),
            max_words: Some(MAX_SCORED_WORDS),
            global_name: GLOBAL_NAME.to_string(),
            fetch: FetchOptions::default(),
        }
    }
}

impl SentenceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sentence.trim().is_empty() {
            return Err(TableError::Config("sentence must not be empty".into()));
        }
        if self.global_name.trim().is_empty() {
            return Err(TableError::Config("assignment target must not be empty".into()));
        }
        self.filter.validate()
    }
}
