//! Serializing the finished table for the game client.
//!
//! The pair table is a bare minified JSON object. The sentence table is
//! minified JSON wrapped in an assignment (`window.GAME_DATA = {...};`) so a
//! page can load it with a plain script tag.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};
use crate::scorer::ScoreTable;
use crate::targets::StructureEntry;

/// Payload of the sentence variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub structure: Vec<StructureEntry>,
    pub dictionary: ScoreTable,
}

/// Either output format, as read back from disk.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Pair(ScoreTable),
    Sentence(GameData),
}

impl Payload {
    pub fn table(&self) -> &ScoreTable {
        match self {
            Payload::Pair(t) => t,
            Payload::Sentence(d) => &d.dictionary,
        }
    }

    pub fn structure(&self) -> Option<&[StructureEntry]> {
        match self {
            Payload::Pair(_) => None,
            Payload::Sentence(d) => Some(d.structure.as_slice()),
        }
    }
}

pub fn render_pair_table(table: &ScoreTable) -> Result<String> {
    Ok(serde_json::to_string(table)?)
}

pub fn render_sentence_payload(data: &GameData, global_name: &str) -> Result<String> {
    let json = serde_json::to_string(data)?;
    Ok(format!("{global_name} = {json};"))
}

/// Write the rendered payload. Not atomic; a failed write may leave a
/// partial file.
pub fn write_output<P: AsRef<Path>>(path: P, contents: &str) -> Result<u64> {
    fs::write(path, contents)?;
    Ok(contents.len() as u64)
}

/// Parse either output format.
pub fn parse_payload(text: &str) -> Result<Payload> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(trimmed)?;
        // a pair table maps every key, even "structure", to an array of scores
        let structured = value.get("structure").is_some_and(|v| v.is_array())
            && value.get("dictionary").is_some_and(|v| v.is_object());
        if structured {
            return Ok(Payload::Sentence(serde_json::from_value(value)?));
        }
        return Ok(Payload::Pair(serde_json::from_value(value)?));
    }

    let (_, rhs) = trimmed
        .split_once('=')
        .ok_or_else(|| TableError::Payload("expected JSON or an assignment".into()))?;
    let json = rhs.trim().trim_end_matches(';').trim_end();
    if !json.starts_with('{') {
        return Err(TableError::Payload("assignment does not hold a JSON object".into()));
    }
    Ok(Payload::Sentence(serde_json::from_str(json)?))
}

pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<Payload> {
    parse_payload(&fs::read_to_string(path)?)
}
