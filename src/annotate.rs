//! Tokenizing and tagging the secret sentence.
//!
//! [`LexiconAnnotator`] is a small deterministic tagger: an optional
//! word/tag lexicon, then punctuation and number detection, proper-noun
//! capitalization, suffix rules, and finally a noun default. It does not try
//! to match any particular statistical tagger.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, TableError};
use crate::stop_words::stop_words;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Aux,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Intj,
    Sym,
    X,
}

impl PosTag {
    /// Content-word tags eligible to become targets.
    pub fn is_content(self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Verb | PosTag::Adj | PosTag::Adv | PosTag::Propn
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Part => "PART",
            PosTag::Num => "NUM",
            PosTag::Punct => "PUNCT",
            PosTag::Intj => "INTJ",
            PosTag::Sym => "SYM",
            PosTag::X => "X",
        }
    }
}

impl fmt::Display for PosTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PosTag {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self> {
        let tag = match s.trim().to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::Propn,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adj,
            "ADV" => PosTag::Adv,
            "PRON" => PosTag::Pron,
            "DET" => PosTag::Det,
            "ADP" => PosTag::Adp,
            "AUX" => PosTag::Aux,
            "CCONJ" | "CONJ" => PosTag::Cconj,
            "SCONJ" => PosTag::Sconj,
            "PART" => PosTag::Part,
            "NUM" => PosTag::Num,
            "PUNCT" => PosTag::Punct,
            "INTJ" => PosTag::Intj,
            "SYM" => PosTag::Sym,
            "X" => PosTag::X,
            other => return Err(TableError::Config(format!("unknown POS tag '{other}'"))),
        };
        Ok(tag)
    }
}

/// One annotated token of a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
    pub is_stop: bool,
}

/// Linguistic annotations the target extractor needs.
pub trait Annotator {
    /// Tokens in sentence order.
    fn annotate(&self, text: &str) -> Vec<Token>;
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\w+(?:['’]\w+)*|[^\w\s]").expect("token pattern is valid")
    })
}

/// Enclitics split off their host, `n't` first so "can't" becomes "ca" + "n't".
const CLITICS: &[&str] = &["n't", "'s", "'re", "'ll", "'ve", "'m", "'d"];

/// Split a trailing clitic from `word`. Words like "o'clock" stay whole.
fn split_clitic(word: &str) -> (&str, Option<&str>) {
    let normalized = word.to_lowercase().replace('’', "'");
    for clitic in CLITICS {
        if normalized.ends_with(clitic) && normalized.len() > clitic.len() {
            // `’` is three bytes where `'` is one
            let tail_chars = clitic.chars().count();
            let split = word
                .char_indices()
                .rev()
                .nth(tail_chars - 1)
                .map(|(i, _)| i)
                .unwrap_or(0);
            if split > 0 {
                return (&word[..split], Some(&word[split..]));
            }
        }
    }
    (word, None)
}

const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ate", "ize", "ise", "ify"];
const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish",
];

pub struct LexiconAnnotator {
    lexicon: HashMap<String, PosTag>,
    stop_words: HashSet<String>,
}

impl Default for LexiconAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconAnnotator {
    pub fn new() -> Self {
        Self {
            lexicon: HashMap::new(),
            stop_words: stop_words(),
        }
    }

    /// Add `word<TAB>TAG` entries from a file. Blank lines and `#` comments are
    /// ignored.
    pub fn with_lexicon_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        self.with_lexicon_text(&text)
    }

    pub fn with_lexicon_text(mut self, text: &str) -> Result<Self> {
        for (n, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, tag) = line.split_once('\t').ok_or_else(|| {
                TableError::Config(format!("lexicon line {}: expected word<TAB>TAG", n + 1))
            })?;
            self.lexicon
                .insert(word.trim().to_lowercase(), tag.parse::<PosTag>()?);
        }
        Ok(self)
    }

    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.lexicon.insert(word.to_lowercase(), tag);
    }

    fn tag(&self, text: &str, lower: &str, is_stop: bool, sentence_start: bool) -> PosTag {
        if let Some(tag) = self.lexicon.get(lower) {
            return *tag;
        }
        let first = match text.chars().next() {
            Some(c) => c,
            None => return PosTag::X,
        };
        if is_stop {
            return function_tag(lower);
        }
        if !first.is_alphanumeric() && first != '_' {
            return match first {
                '$' | '%' | '+' | '<' | '=' | '>' | '^' | '|' | '~' | '#' | '&' | '*' | '@'
                | '€' | '£' | '¥' => PosTag::Sym,
                _ => PosTag::Punct,
            };
        }
        if text.chars().all(|c| c.is_ascii_digit()) {
            return PosTag::Num;
        }
        if first.is_uppercase() && !sentence_start {
            return PosTag::Propn;
        }
        if lower.ends_with("ly") {
            return PosTag::Adv;
        }
        if VERB_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Verb;
        }
        if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            return PosTag::Adj;
        }
        PosTag::Noun
    }
}

/// Coarse tag for a stop word.
fn function_tag(lower: &str) -> PosTag {
    match lower {
        "i" | "me" | "my" | "we" | "us" | "our" | "you" | "your" | "he" | "him" | "his"
        | "she" | "her" | "it" | "its" | "they" | "them" | "their" => PosTag::Pron,
        "a" | "an" | "the" | "this" | "that" | "these" | "those" | "some" | "any" | "every"
        | "each" | "no" => PosTag::Det,
        "and" | "or" | "but" | "nor" => PosTag::Cconj,
        "since" | "because" | "although" | "though" | "if" | "while" | "unless" | "whether" => {
            PosTag::Sconj
        }
        "am" | "is" | "are" | "was" | "were" | "be" | "been" | "being" | "can" | "cannot"
        | "could" | "will" | "would" | "shall" | "should" | "may" | "might" | "must" | "do"
        | "does" | "did" | "ca" | "wo" | "'s" | "'re" | "'ll" | "'ve" | "'m" | "'d" => {
            PosTag::Aux
        }
        "not" | "n't" | "to" => PosTag::Part,
        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "from" | "during" | "into"
        | "about" | "over" | "under" | "through" | "near" => PosTag::Adp,
        "please" => PosTag::Intj,
        _ => PosTag::Adv,
    }
}

impl Annotator for LexiconAnnotator {
    fn annotate(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut sentence_start = true;
        for m in token_pattern().find_iter(text) {
            let word = m.as_str().trim();
            if word.is_empty() {
                continue;
            }
            let (host, clitic) = split_clitic(word);
            for surface in std::iter::once(host).chain(clitic) {
                let lower = surface.to_lowercase().replace('’', "'");
                let is_stop = self.stop_words.contains(&lower);
                let pos = self.tag(surface, &lower, is_stop, sentence_start);
                sentence_start = matches!(surface, "." | "!" | "?");
                tokens.push(Token {
                    text: surface.to_string(),
                    pos,
                    is_stop,
                });
            }
        }
        tokens
    }
}
