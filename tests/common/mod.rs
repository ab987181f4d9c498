#![allow(dead_code)]

use std::collections::HashMap;

use simtable::Oracle;

/// Oracle with a fixed vocabulary and hand-picked similarities.
///
/// Self-similarity is deliberately a hair below 1.0 so the self-score patch
/// has something to fix.
pub struct StubOracle {
    vectors: HashMap<String, Vec<f32>>,
    sims: HashMap<(String, String), f32>,
}

impl StubOracle {
    pub fn new(words: &[&str]) -> Self {
        let vectors = words
            .iter()
            .map(|w| (w.to_string(), vec![1.0, 0.5]))
            .collect();
        Self {
            vectors,
            sims: HashMap::new(),
        }
    }

    pub fn with_zero_vector(mut self, word: &str) -> Self {
        self.vectors.insert(word.to_string(), vec![0.0, 0.0]);
        self
    }

    pub fn sim(mut self, a: &str, b: &str, value: f32) -> Self {
        self.sims.insert((a.to_string(), b.to_string()), value);
        self.sims.insert((b.to_string(), a.to_string()), value);
        self
    }
}

impl Oracle for StubOracle {
    fn vector_of(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        if !self.has_vector(a) || !self.has_vector(b) {
            return None;
        }
        if a == b {
            return Some(0.994);
        }
        Some(
            self.sims
                .get(&(a.to_string(), b.to_string()))
                .copied()
                .unwrap_or(0.0),
        )
    }
}

pub const FIXTURE_VECTORS: &str = "\
heated 0.9 0.1 0.0
blanket 0.1 0.9 0.0
warm 0.8 0.3 0.1
quilt 0.2 0.8 0.1
cold -0.9 -0.1 0.0
ice -0.7 0.0 0.2
zero 0.0 0.0 0.0
";

pub const FIXTURE_WORDS: &str = "\
Warm
quilt
warm
cold
asdfzzz
ice
zero
extraordinarily
";
