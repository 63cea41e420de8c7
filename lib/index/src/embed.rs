//! The embedding collaborator seam.
//!
//! [`Embedder`] is the boundary where an external embedding model plugs in.
//! The shipped [`HashEmbedder`] is deterministic feature hashing: character
//! trigrams and whole words are hashed into a fixed number of buckets and
//! the result is L2-normalised. It needs no model download and gives
//! lexically similar sentences nearby vectors, which is what the per-record
//! retrieval pass relies on.

use crate::vector::Vector;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Dimension of the reference configuration's sentence embeddings.
pub const DEFAULT_DIM: usize = 384;

/// Maps text to fixed-dimension vectors. Must be deterministic: the same
/// input always embeds to the same vector within one index lifetime.
pub trait Embedder {
    fn dim(&self) -> usize;
    fn embed(&self, text: &str) -> Vector;
}

/// Hash-based text embedder.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dim: usize,
}

impl HashEmbedder {
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }

    #[inline]
    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dim
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_DIM)
    }
}

impl Embedder for HashEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Vector {
        let mut buckets = vec![0.0f32; self.dim];
        let lowered = text.to_lowercase();

        let chars: Vec<char> = lowered.chars().collect();
        for trigram in chars.windows(3) {
            let token: String = trigram.iter().collect();
            buckets[self.bucket(&token)] += 1.0;
        }

        // Whole words carry more signal than their trigrams.
        for word in lowered.split_whitespace() {
            buckets[self.bucket(word)] += 2.0;
        }

        let mut vector = Vector::new(buckets);
        vector.normalize();
        vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric;

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = HashEmbedder::new(64);
        let a = embedder.embed("Age: 30, Smoker: yes");
        let b = embedder.embed("Age: 30, Smoker: yes");
        assert_eq!(a, b);
    }

    #[test]
    fn test_dimension_and_norm() {
        let embedder = HashEmbedder::default();
        let v = embedder.embed("hello world");
        assert_eq!(v.dim(), DEFAULT_DIM);
        assert!((metric::norm(v.as_slice()) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_similar_texts_are_closer() {
        let embedder = HashEmbedder::default();
        let base = embedder.embed("Age: 30, Smoker: yes, Region: southwest");
        let near = embedder.embed("Age: 31, Smoker: yes, Region: southwest");
        let far = embedder.embed("completely unrelated sentence about weather");
        assert!(base.cosine_similarity(&near) > base.cosine_similarity(&far));
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let embedder = HashEmbedder::new(16);
        let v = embedder.embed("");
        assert!(v.as_slice().iter().all(|&x| x == 0.0));
    }
}
