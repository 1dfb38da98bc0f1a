//! Corpus of vectorized documents shared read-only by every star.

use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compute::distance;

/// A document reduced to its feature weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier (usually the source path).
    pub id: String,
    /// Feature weights, one per dimension.
    pub weights: Vec<f64>,
}

impl Document {
    /// Create a new document.
    pub fn new(id: impl Into<String>, weights: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            weights,
        }
    }

    /// Distance from this document to an arbitrary vector of the same dimension.
    #[inline]
    pub fn distance_to(&self, v: &[f64]) -> f64 {
        distance(&self.weights, v)
    }
}

/// On-disk corpus layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CorpusFile {
    documents: Vec<Document>,
}

/// An ordered, non-empty set of documents sharing one dimensionality.
#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<Document>,
    dimension: usize,
}

impl Corpus {
    /// Build a corpus, checking that it is non-empty and dimensionally consistent.
    pub fn new(documents: Vec<Document>) -> Result<Self, CorpusError> {
        let dimension = documents
            .first()
            .map(|d| d.weights.len())
            .ok_or(CorpusError::Empty)?;
        if dimension == 0 {
            return Err(CorpusError::ZeroDimension);
        }

        if let Some((index, doc)) = documents
            .iter()
            .enumerate()
            .find(|(_, d)| d.weights.len() != dimension)
        {
            return Err(CorpusError::DimensionMismatch {
                index,
                expected: dimension,
                found: doc.weights.len(),
            });
        }

        Ok(Self {
            documents,
            dimension,
        })
    }

    /// Build a corpus from bare weight vectors, naming documents by index.
    pub fn from_vectors(vectors: Vec<Vec<f64>>) -> Result<Self, CorpusError> {
        Self::new(
            vectors
                .into_iter()
                .enumerate()
                .map(|(i, weights)| Document::new(format!("doc-{i}"), weights))
                .collect(),
        )
    }

    /// Parse a corpus from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let file: CorpusFile = serde_json::from_str(json)?;
        Self::new(file.documents)
    }

    /// Load a corpus from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize the corpus to pretty JSON.
    pub fn to_json(&self) -> Result<String, CorpusError> {
        let file = CorpusFile {
            documents: self.documents.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Number of documents.
    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Always false for a constructed corpus.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Feature dimensionality shared by every document.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Documents in corpus order.
    #[inline]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate over documents.
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }
}

impl Index<usize> for Corpus {
    type Output = Document;

    fn index(&self, index: usize) -> &Document {
        &self.documents[index]
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

/// Corpus construction and loading errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("Corpus contains no documents")]
    Empty,
    #[error("Documents must have at least one dimension")]
    ZeroDimension,
    #[error("Document {index} has {found} weights, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
    #[error("Failed to read corpus: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to parse corpus: {0}")]
    Json(#[from] serde_json::Error),
}
