//! Vector index contract and an in-memory cosine implementation.

use crate::corpus::{Verse, VerseCorpus};
use crate::embed::Embedder;
use crate::error::CorpusError;

/// A verse with its retrieval score (higher is closer).
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVerse {
    pub verse: Verse,
    pub score: f32,
}

/// Similarity-search oracle keyed by cosine distance.
pub trait VectorIndex {
    /// Insert or replace the vector and payload for a verse id.
    fn upsert(&mut self, id: &str, vector: Vec<f32>, payload: Verse) -> Result<(), CorpusError>;

    /// Nearest `k` entries to `vector`, best first.
    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredVerse>, CorpusError>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Brute-force in-memory cosine index.
///
/// Vectors are normalized at upsert, so the query dot product is the
/// cosine similarity directly.
#[derive(Debug, Clone, Default)]
pub struct CosineIndex {
    entries: Vec<(String, Vec<f32>, Verse)>,
}

impl CosineIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

fn normalize(mut v: Vec<f32>) -> Vec<f32> {
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut v {
            *x /= norm;
        }
    }
    v
}

impl VectorIndex for CosineIndex {
    fn upsert(&mut self, id: &str, vector: Vec<f32>, payload: Verse) -> Result<(), CorpusError> {
        if vector.is_empty() {
            return Err(CorpusError::Index("empty vector"));
        }
        let vector = normalize(vector);
        match self.entries.iter_mut().find(|(eid, _, _)| eid == id) {
            Some(entry) => *entry = (id.to_string(), vector, payload),
            None => self.entries.push((id.to_string(), vector, payload)),
        }
        Ok(())
    }

    fn query(&self, vector: &[f32], k: usize) -> Result<Vec<ScoredVerse>, CorpusError> {
        let query = normalize(vector.to_vec());
        let mut scored: Vec<ScoredVerse> = self
            .entries
            .iter()
            .map(|(_, v, payload)| ScoredVerse {
                verse: payload.clone(),
                score: v.iter().zip(&query).map(|(a, b)| a * b).sum(),
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(k);
        Ok(scored)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Embed every corpus verse and upsert it into the index.
///
/// The embedded text is the meaning followed by the tags, which is what
/// retrieval queries are built from.
pub fn index_corpus(
    corpus: &VerseCorpus,
    embedder: &dyn Embedder,
    index: &mut dyn VectorIndex,
) -> Result<usize, CorpusError> {
    for verse in corpus.iter() {
        let text = format!("{} {}", verse.meaning, verse.tags.join(" "));
        let vector = embedder.embed(&text)?;
        index.upsert(&verse.id, vector, verse.clone())?;
    }
    Ok(corpus.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verse(id: &str, meaning: &str) -> Verse {
        Verse {
            id: id.to_string(),
            devanagari: String::new(),
            transliteration: String::new(),
            meaning: meaning.to_string(),
            source: String::new(),
            tags: vec![],
        }
    }

    #[test]
    fn nearest_vector_wins() {
        let mut idx = CosineIndex::new();
        idx.upsert("a", vec![1.0, 0.0], verse("a", "x")).unwrap();
        idx.upsert("b", vec![0.0, 1.0], verse("b", "y")).unwrap();
        let hits = idx.query(&[0.9, 0.1], 1).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].verse.id, "a");
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut idx = CosineIndex::new();
        idx.upsert("a", vec![1.0, 0.0], verse("a", "old")).unwrap();
        idx.upsert("a", vec![1.0, 0.0], verse("a", "new")).unwrap();
        assert_eq!(idx.len(), 1);
        assert_eq!(idx.query(&[1.0, 0.0], 1).unwrap()[0].verse.meaning, "new");
    }

    #[test]
    fn empty_vector_rejected() {
        let mut idx = CosineIndex::new();
        assert!(idx.upsert("a", vec![], verse("a", "x")).is_err());
    }
}
