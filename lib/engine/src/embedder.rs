//! Text embedder
//!
//! Maps free text to a fixed-dimension vector by hashing character trigrams
//! and whole words into buckets. The pipeline treats the output as opaque;
//! all that matters is that similar text lands close under L2 distance and
//! that the same text always produces the same vector.

use savora_core::Vector;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Default embedding dimension, shared by ingestion and query time
pub const DEFAULT_EMBED_DIM: usize = 128;

/// Deterministic hash-based text embedder.
///
/// `DefaultHasher::new()` uses fixed keys, so vectors are stable across
/// processes: the ingestion job and the serving process agree as long as
/// they agree on the dimension. The loader derives the query-side dimension
/// from the loaded index for exactly this reason.
#[derive(Debug, Clone)]
pub struct TextEmbedder {
    dim: usize,
}

impl TextEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embed text into a unit-length vector.
    pub fn embed(&self, text: &str) -> Vector {
        let mut components = vec![0.0f32; self.dim];
        let lowered = text.to_lowercase();
        if lowered.trim().is_empty() {
            return Vector::new(components);
        }

        for trigram in trigrams(&lowered) {
            components[self.bucket(&trigram)] += 1.0;
        }

        // Whole words anchor matches more strongly than their trigrams.
        for word in lowered.split_whitespace() {
            components[self.bucket(word)] += 2.0;
        }

        let mut vector = Vector::new(components);
        vector.normalize();
        vector
    }

    #[inline]
    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dim
    }
}

/// Character trigrams over the input, padded so short tokens still produce
/// windows
fn trigrams(text: &str) -> Vec<String> {
    let padded = format!("  {}  ", text);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return Vec::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dimension() {
        let embedder = TextEmbedder::new(64);
        assert_eq!(embedder.embed("north indian food").dim(), 64);
    }

    #[test]
    fn test_same_text_same_vector() {
        let embedder = TextEmbedder::new(DEFAULT_EMBED_DIM);
        let a = embedder.embed("spicy italian in indiranagar");
        let b = embedder.embed("spicy italian in indiranagar");
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_output_is_normalized() {
        let embedder = TextEmbedder::new(DEFAULT_EMBED_DIM);
        let v = embedder.embed("microbrewery");
        let magnitude: f32 = v.as_slice().iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_similar_text_closer_than_different() {
        let embedder = TextEmbedder::new(DEFAULT_EMBED_DIM);
        let query = embedder.embed("north indian food in koramangala");
        let similar = embedder.embed("north indian restaurant in koramangala");
        let different = embedder.embed("sushi bar downtown tokyo");

        assert!(query.l2_distance(&similar) < query.l2_distance(&different));
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let embedder = TextEmbedder::new(32);
        let v = embedder.embed("");
        // Nothing to hash; normalization leaves the zero vector untouched.
        assert!(v.as_slice().iter().all(|x| *x == 0.0));
    }
}
