//! Exact (flat) nearest-neighbor index over embedded documents.
//!
//! Built once per run and read-only afterwards. The index owns its
//! embedding collaborator so queries are guaranteed to use the same model
//! that embedded the stored documents. Search is a sequential scan scoring
//! every entry — exact, and fast enough for the hundreds-to-thousands of
//! rows this pipeline targets.

use crate::document::Document;
use crate::embed::Embedder;
use crate::error::{IndexError, Result};
use crate::metric::{self, Metric};
use crate::vector::Vector;

/// Default neighbor count for ad-hoc queries.
pub const DEFAULT_SEARCH_K: usize = 5;

struct Entry {
    vector: Vector,
    document: Document,
}

/// A scored retrieval hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Scored {
    pub document: Document,
    pub score: f32,
}

pub struct SimilarityIndex {
    metric: Metric,
    dim: usize,
    embedder: Box<dyn Embedder>,
    entries: Vec<Entry>,
}

impl SimilarityIndex {
    /// Build a cosine index, embedding every document with `embedder`.
    pub fn build(embedder: Box<dyn Embedder>, documents: Vec<Document>) -> Result<Self> {
        Self::build_with_metric(embedder, documents, Metric::Cosine)
    }

    pub fn build_with_metric(
        embedder: Box<dyn Embedder>,
        documents: Vec<Document>,
        metric: Metric,
    ) -> Result<Self> {
        if documents.is_empty() {
            return Err(IndexError::EmptyIndex);
        }
        let dim = embedder.dim();
        let entries = documents
            .into_iter()
            .map(|document| {
                let vector = embedder.embed(&document.text);
                if vector.dim() != dim {
                    return Err(IndexError::InvalidDimension {
                        expected: dim,
                        actual: vector.dim(),
                    });
                }
                Ok(Entry { vector, document })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            metric,
            dim,
            embedder,
            entries,
        })
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The k nearest documents to `query`, best first. Ties (and NaN
    /// scores) resolve by insertion order, so results are stable.
    #[must_use]
    pub fn search(&self, query: &str, k: usize) -> Vec<Scored> {
        let query_vector = self.embedder.embed(query);
        let mut hits: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                (
                    i,
                    metric::score(self.metric, query_vector.as_slice(), entry.vector.as_slice()),
                )
            })
            .collect();

        hits.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        hits.truncate(k);

        hits.into_iter()
            .map(|(i, score)| Scored {
                document: self.entries[i].document.clone(),
                score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::HashEmbedder;

    fn sample_docs() -> Vec<Document> {
        vec![
            Document::new(0, "Age: 30, Smoker: yes, Region: southwest"),
            Document::new(1, "Age: 31, Smoker: yes, Region: southwest"),
            Document::new(2, "Age: 62, Smoker: no, Region: northeast"),
        ]
    }

    #[test]
    fn test_self_query_ranks_itself_first() {
        let index = SimilarityIndex::build(Box::new(HashEmbedder::new(128)), sample_docs()).unwrap();
        let hits = index.search("Age: 30, Smoker: yes, Region: southwest", 3);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].document.row, 0);
        assert!(hits[0].score >= hits[1].score);
        assert!(hits[1].score >= hits[2].score);
    }

    #[test]
    fn test_empty_build_rejected() {
        let result = SimilarityIndex::build(Box::new(HashEmbedder::new(16)), Vec::new());
        assert!(matches!(result, Err(IndexError::EmptyIndex)));
    }

    #[test]
    fn test_k_larger_than_index() {
        let index = SimilarityIndex::build(Box::new(HashEmbedder::new(64)), sample_docs()).unwrap();
        assert_eq!(index.search("anything", 10).len(), 3);
    }

    #[test]
    fn test_ties_resolve_by_insertion_order() {
        // Identical texts embed identically, so scores tie exactly.
        let docs = vec![
            Document::new(0, "same sentence"),
            Document::new(1, "same sentence"),
            Document::new(2, "same sentence"),
        ];
        let index = SimilarityIndex::build(Box::new(HashEmbedder::new(32)), docs).unwrap();
        let rows: Vec<u64> = index
            .search("same sentence", 3)
            .iter()
            .map(|s| s.document.row)
            .collect();
        assert_eq!(rows, [0, 1, 2]);
    }

    #[test]
    fn test_l2_metric_agrees_on_nearest() {
        let index = SimilarityIndex::build_with_metric(
            Box::new(HashEmbedder::new(128)),
            sample_docs(),
            Metric::L2,
        )
        .unwrap();
        let hits = index.search("Age: 62, Smoker: no, Region: northeast", 1);
        assert_eq!(hits[0].document.row, 2);
    }
}
