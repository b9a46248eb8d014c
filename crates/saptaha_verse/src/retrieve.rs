//! Two-tier retrieval: vector similarity with keyword fallback.

use std::time::Instant;

use tracing::{debug, warn};

use crate::corpus::{Verse, VerseCorpus};
use crate::embed::Embedder;
use crate::index::VectorIndex;

/// Observability record for one search call. Latency is a signal only;
/// nothing branches on it.
#[derive(Debug, Clone, Default)]
pub struct SearchMeta {
    pub query: String,
    pub latency_ms: f64,
    pub verse_id: Option<String>,
    pub verse_source: Option<String>,
}

/// Ranked retrieval over a verse corpus.
///
/// The vector tier (embedder + index) is optional; when it is absent or
/// returns nothing, keyword scoring over the corpus takes over. A vector
/// tier fault is treated as "no results" for fallback purposes: logged,
/// never propagated.
pub struct Retriever<'a> {
    corpus: &'a VerseCorpus,
    vector: Option<(&'a dyn Embedder, &'a dyn VectorIndex)>,
}

impl<'a> Retriever<'a> {
    /// Keyword-only retriever.
    pub fn new(corpus: &'a VerseCorpus) -> Self {
        Self {
            corpus,
            vector: None,
        }
    }

    /// Attach a vector tier.
    pub fn with_vector(
        corpus: &'a VerseCorpus,
        embedder: &'a dyn Embedder,
        index: &'a dyn VectorIndex,
    ) -> Self {
        Self {
            corpus,
            vector: Some((embedder, index)),
        }
    }

    /// Ranked search: vector tier first, keyword fallback on empty.
    pub fn search(&self, query: &str, k: usize) -> Vec<Verse> {
        let started = Instant::now();
        let mut results = self.vector_search(query, k);
        let tier = if results.is_empty() { "keyword" } else { "vector" };
        if results.is_empty() {
            results = self.keyword_search(query, k);
        }
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        debug!(tier, latency_ms, hits = results.len(), query, "verse search");
        results
    }

    /// Like [`search`](Self::search), also reporting query/latency metadata.
    pub fn search_with_meta(&self, query: &str, k: usize) -> (Vec<Verse>, SearchMeta) {
        let started = Instant::now();
        let results = self.search(query, k);
        let meta = SearchMeta {
            query: query.to_string(),
            latency_ms: started.elapsed().as_secs_f64() * 1000.0,
            verse_id: results.first().map(|v| v.id.clone()),
            verse_source: results.first().map(|v| v.source.clone()),
        };
        (results, meta)
    }

    /// Vector tier. Absent index is the normal degraded condition; an
    /// erroring tier is downgraded to empty with a warning.
    fn vector_search(&self, query: &str, k: usize) -> Vec<Verse> {
        let Some((embedder, index)) = self.vector else {
            debug!("vector tier absent, using keyword search");
            return Vec::new();
        };
        if index.is_empty() {
            debug!("vector index empty, using keyword search");
            return Vec::new();
        }
        let vector = match embedder.embed(query) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "embedding failed, falling back to keyword search");
                return Vec::new();
            }
        };
        match index.query(&vector, k) {
            Ok(hits) => hits.into_iter().map(|s| s.verse).collect(),
            Err(e) => {
                warn!(error = %e, "vector query failed, falling back to keyword search");
                Vec::new()
            }
        }
    }

    /// Keyword tier: score = tags found in the query + whole-query
    /// substring match against the meaning. Stable sort keeps corpus
    /// order on ties; zero scores are dropped.
    pub fn keyword_search(&self, query: &str, k: usize) -> Vec<Verse> {
        let query_lower = query.to_lowercase();
        let mut scored: Vec<(usize, &Verse)> = self
            .corpus
            .iter()
            .map(|v| {
                let tag_hits = v
                    .tags
                    .iter()
                    .filter(|t| query_lower.contains(t.as_str()))
                    .count();
                let meaning_hit =
                    usize::from(v.meaning.to_lowercase().contains(&query_lower));
                (tag_hits + meaning_hit, v)
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored
            .into_iter()
            .take(k)
            .filter(|(score, _)| *score > 0)
            .map(|(_, v)| v.clone())
            .collect()
    }
}
