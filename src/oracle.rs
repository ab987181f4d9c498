//! The embedding oracle: anything that can hand out word vectors and compare
//! two words.

/// Word-embedding capability used by the scorer.
///
/// Implementations only need [`Oracle::vector_of`]; the default
/// [`Oracle::similarity`] is cosine similarity over those vectors. Stub
/// oracles in tests override `similarity` to return fixed values.
pub trait Oracle {
    /// Vector for `word`, if the model knows it.
    fn vector_of(&self, word: &str) -> Option<&[f32]>;

    /// Similarity in `[-1, 1]`, or `None` when either side has no usable vector.
    fn similarity(&self, a: &str, b: &str) -> Option<f32> {
        cosine_similarity(self.vector_of(a)?, self.vector_of(b)?)
    }

    /// True when `word` has a vector with non-zero norm.
    fn has_vector(&self, word: &str) -> bool {
        self.vector_of(word)
            .map_or(false, |v| v.iter().any(|x| *x != 0.0))
    }
}

/// Cosine similarity between two vectors.
///
/// Returns `None` for mismatched or empty inputs, zero-norm vectors and
/// non-finite results.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f32> {
    if a.len() != b.len() || a.is_empty() {
        return None;
    }
    let (dot, na, nb) = a
        .iter()
        .zip(b)
        .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (x, y)| {
            let (x, y) = (*x as f64, *y as f64);
            (dot + x * y, na + x * x, nb + y * y)
        });
    if na == 0.0 || nb == 0.0 {
        return None;
    }
    let sim = dot / (na.sqrt() * nb.sqrt());
    sim.is_finite().then_some(sim as f32)
}

/// Scale a similarity to an integer percentage.
///
/// Truncates toward zero and clamps into `0..=100`; negative similarities
/// become 0. NaN maps to 0.
pub fn to_percent(similarity: f32) -> u8 {
    let pct = (similarity * 100.0) as i32;
    pct.clamp(0, 100) as u8
}
