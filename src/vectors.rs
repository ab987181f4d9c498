//! Text embedding files (GloVe / word2vec text format).
//!
//! Each line is a word followed by its components separated by whitespace.
//! word2vec files start with a `count dim` header line, which is skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, TableError};
use crate::oracle::Oracle;

/// In-memory embedding table.
///
/// Vectors are stored back to back in one buffer together with their norms.
pub struct WordVectors {
    index: HashMap<String, usize>,
    data: Vec<f32>,
    norms: Vec<f32>,
    dim: usize,
}

impl WordVectors {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading word vectors from {}", path.display());
        let file = File::open(path)?;
        let vectors = Self::from_reader(BufReader::new(file))?;
        info!("loaded {} vectors of dimension {}", vectors.len(), vectors.dim);
        Ok(vectors)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut index = HashMap::new();
        let mut data = Vec::new();
        let mut norms = Vec::new();
        let mut dim = 0usize;

        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();

            if n == 0 && is_word2vec_header(word, &rest) {
                debug!("skipping word2vec header");
                continue;
            }

            let components = rest
                .iter()
                .map(|f| f.parse::<f32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| {
                    TableError::Model(format!("line {}: bad component for '{word}': {e}", n + 1))
                })?;

            if components.is_empty() {
                return Err(TableError::Model(format!(
                    "line {}: '{word}' has no components",
                    n + 1
                )));
            }
            if dim == 0 {
                dim = components.len();
            } else if components.len() != dim {
                return Err(TableError::Model(format!(
                    "line {}: expected {dim} components, found {}",
                    n + 1,
                    components.len()
                )));
            }

            // first occurrence wins, like most loaders
            if index.contains_key(word) {
                continue;
            }
            let norm = components.iter().map(|x| x * x).sum::<f32>().sqrt();
            index.insert(word.to_string(), norms.len());
            data.extend_from_slice(&components);
            norms.push(norm);
        }

        if norms.is_empty() {
            return Err(TableError::Model("embedding file contains no vectors".into()));
        }
        Ok(Self {
            index,
            data,
            norms,
            dim,
        })
    }

    pub fn len(&self) -> usize {
        self.norms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.norms.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Exact form first, then lowercase.
    fn slot(&self, word: &str) -> Option<usize> {
        if let Some(&i) = self.index.get(word) {
            return Some(i);
        }
        let lower = word.to_lowercase();
        if lower != word {
            return self.index.get(&lower).copied();
        }
        None
    }

    fn row(&self, slot: usize) -> &[f32] {
        &self.data[slot * self.dim..(slot + 1) * self.dim]
    }
}

fn is_word2vec_header(first: &str, rest: &[&str]) -> bool {
    rest.len() == 1 && first.parse::<usize>().is_ok() && rest[0].parse::<usize>().is_ok()
}

impl Oracle for WordVectors {
    fn vector_of(&self, word: &str) -> Option<&[f32]> {
        self.slot(word).map(|i| self.row(i))
    }

    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        let (ia, ib) = (self.slot(a)?, self.slot(b)?);
        let denom = self.norms[ia] * self.norms[ib];
        if denom == 0.0 {
            return None;
        }
        let dot: f32 = self.row(ia).iter().zip(self.row(ib)).map(|(x, y)| x * y).sum();
        let sim = dot / denom;
        sim.is_finite().then_some(sim)
    }

    fn has_vector(&self, word: &str) -> bool {
        self.slot(word).map_or(false, |i| self.norms[i] != 0.0)
    }
}
