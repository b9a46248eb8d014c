//! Error types for corpus ingestion and the vector tier.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from corpus loading and verse ingestion.
#[derive(Debug)]
#[non_exhaustive]
pub enum CorpusError {
    /// Corpus file could not be read.
    Io(std::io::Error),
    /// Corpus file is not valid verse JSON.
    Json(serde_json::Error),
    /// Two verses share an id; uniqueness is an ingestion-time invariant.
    DuplicateId(String),
    /// The vector tier rejected an embedding or query.
    Index(&'static str),
}

impl Display for CorpusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "corpus io error: {e}"),
            Self::Json(e) => write!(f, "corpus parse error: {e}"),
            Self::DuplicateId(id) => write!(f, "duplicate verse id: {id}"),
            Self::Index(msg) => write!(f, "vector index error: {msg}"),
        }
    }
}

impl Error for CorpusError {}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
