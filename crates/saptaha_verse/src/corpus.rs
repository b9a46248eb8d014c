//! The verse corpus: ordered, id-unique, loaded wholesale.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CorpusError;

/// One corpus entry. Identity is the `id`; everything else is display
/// and retrieval material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub id: String,
    pub devanagari: String,
    pub transliteration: String,
    pub meaning: String,
    pub source: String,
    pub tags: Vec<String>,
}

impl Verse {
    /// Three-line display form: Devanagari, transliteration, meaning,
    /// citation.
    pub fn display_block(&self) -> String {
        format!(
            "{}\n{}\n— {}\n[{}]",
            self.devanagari, self.transliteration, self.meaning, self.source
        )
    }
}

/// Ordered collection of verses. Corpus order is the keyword-search
/// tie-break, so insertion order is preserved and never re-sorted.
#[derive(Debug, Clone, Default)]
pub struct VerseCorpus {
    verses: Vec<Verse>,
}

impl VerseCorpus {
    /// Ingest verses, rejecting duplicate ids.
    pub fn new(verses: Vec<Verse>) -> Result<Self, CorpusError> {
        let mut seen = std::collections::HashSet::new();
        for v in &verses {
            if !seen.insert(v.id.as_str()) {
                return Err(CorpusError::DuplicateId(v.id.clone()));
            }
        }
        Ok(Self { verses })
    }

    /// Load a JSON corpus file (an array of verse objects).
    ///
    /// A missing file yields an empty corpus; keyword search over
    /// nothing returns nothing, which downstream represents as an absent
    /// verse, not a fault.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let verses: Vec<Verse> = serde_json::from_str(&raw)?;
        Self::new(verses)
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Verse> {
        self.verses.iter()
    }
}
