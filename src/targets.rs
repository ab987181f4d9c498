//! Target extraction: which words every score vector is measured against.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::annotate::{Annotator, Token};
use crate::error::{Result, TableError};
use crate::oracle::Oracle;

/// Shortest surface form that can become a sentence target.
pub const MIN_TARGET_LEN: usize = 3;

/// A word every candidate is compared against. `index` is its column in
/// the score vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub text: String,
    pub index: usize,
}

impl Target {
    /// Table key for this target.
    pub fn key(&self) -> String {
        self.text.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Target,
    Filler,
}

/// One token of the secret sentence as the game client renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureEntry {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
}

/// Literal targets, in the order given.
pub fn pair_targets<S: AsRef<str>>(words: &[S]) -> Vec<Target> {
    words
        .iter()
        .enumerate()
        .map(|(index, w)| Target {
            text: w.as_ref().trim().to_string(),
            index,
        })
        .collect()
}

/// A token is a target when it is a content word of at least
/// [`MIN_TARGET_LEN`] characters and not a stop word.
pub fn is_target_token(token: &Token) -> bool {
    token.pos.is_content() && token.text.chars().count() >= MIN_TARGET_LEN && !token.is_stop
}

/// Split a sentence into targets and its rendered structure.
///
/// Targets are numbered left to right; each target entry in the structure
/// carries the same id.
pub fn extract_targets<A: Annotator + ?Sized>(
    annotator: &A,
    sentence: &str,
) -> Result<(Vec<Target>, Vec<StructureEntry>)> {
    let mut targets = Vec::new();
    let mut structure = Vec::new();

    for token in annotator.annotate(sentence) {
        let text = token.text.trim();
        if text.is_empty() {
            continue;
        }
        if is_target_token(&token) {
            let index = targets.len();
            info!("[TARGET] {} ({})", text, token.pos);
            targets.push(Target {
                text: text.to_string(),
                index,
            });
            structure.push(StructureEntry {
                text: text.to_string(),
                kind: EntryKind::Target,
                id: Some(index),
            });
        } else {
            debug!("[FILLER] {} ({})", text, token.pos);
            structure.push(StructureEntry {
                text: text.to_string(),
                kind: EntryKind::Filler,
                id: None,
            });
        }
    }

    if targets.is_empty() {
        return Err(TableError::NoTargets);
    }
    Ok((targets, structure))
}

/// Log targets the oracle has no vector for. Their columns score 0 except on
/// the target's own row.
pub fn warn_missing_vectors<O: Oracle + ?Sized>(oracle: &O, targets: &[Target]) -> usize {
    let mut missing = 0;
    for t in targets {
        if !oracle.has_vector(&t.text) {
            warn!("target '{}' has no vector; its column will score 0", t.text);
            missing += 1;
        }
    }
    missing
}
