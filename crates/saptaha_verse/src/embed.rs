//! Text embedding contract and a deterministic in-process model.
//!
//! The embedding model is an explicitly owned resource: constructed once
//! per process and passed by reference into the retrieval engine, never
//! ambient global state.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::CorpusError;

/// Maps text into the corpus's vector space.
pub trait Embedder {
    /// Embedding dimension; all vectors from one embedder share it.
    fn dim(&self) -> usize;

    /// Embed one text. Faults here are treated by the retriever as "no
    /// vector results", never propagated.
    fn embed(&self, text: &str) -> Result<Vec<f32>, CorpusError>;
}

/// Feature-hashing bag-of-words embedder.
///
/// Each lower-cased token hashes to a bucket; cosine similarity between
/// two texts then reflects token overlap. Deterministic, no model files,
/// suitable as the default in-process tier.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl HashingEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(256)
    }
}

impl Embedder for HashingEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, text: &str) -> Result<Vec<f32>, CorpusError> {
        let mut v = vec![0.0f32; self.dim];
        for token in text.to_lowercase().split_whitespace() {
            let mut h = DefaultHasher::new();
            token.hash(&mut h);
            v[(h.finish() as usize) % self.dim] += 1.0;
        }
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut v {
                *x /= norm;
            }
        }
        Ok(v)
    }
}
