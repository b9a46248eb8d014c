//! Verse corpus and two-tier retrieval.
//!
//! This crate provides:
//! - The [`VerseCorpus`]: an ordered collection of Sanskrit verses with
//!   id uniqueness enforced at ingestion
//! - The [`Embedder`] and [`VectorIndex`] contracts, with a deterministic
//!   [`HashingEmbedder`] and an in-memory [`CosineIndex`]
//! - The [`Retriever`]: vector similarity search with keyword-overlap
//!   fallback; an absent or failing vector strategy degrades, it never
//!   aborts
//! - Query construction from observances and panchanga context

pub mod corpus;
pub mod embed;
pub mod error;
pub mod index;
pub mod query;
pub mod retrieve;

pub use corpus::{Verse, VerseCorpus};
pub use embed::{Embedder, HashingEmbedder};
pub use error::CorpusError;
pub use index::{CosineIndex, ScoredVerse, VectorIndex, index_corpus};
pub use query::{build_week_query, day_query, nakshatra_lifestyle, nakshatra_theme};
pub use retrieve::{Retriever, SearchMeta};
