//! # medcast Index
//!
//! Retrieval layer for the medcast pipeline:
//!
//! - [`Vector`] - dense embedding vector with cosine/L2 operations
//! - [`Embedder`] - the embedding-collaborator seam, with a deterministic
//!   hash-based implementation ([`HashEmbedder`])
//! - [`Document`] - rendered record text plus structured charge metadata
//! - [`SimilarityIndex`] - exact k-NN over embedded documents, stable ties
//! - [`synthesize`] - record-to-text rendering
//! - [`insight`] - mean neighbor charge per record, fail-soft extraction
//!
//! ## Example
//!
//! ```rust
//! use medcast_index::{Document, HashEmbedder, SimilarityIndex};
//!
//! let docs = vec![
//!     Document::new(0, "Age: 30, Smoker: yes").with_charges(2000.0),
//!     Document::new(1, "Age: 60, Smoker: no").with_charges(9000.0),
//! ];
//! let index = SimilarityIndex::build(Box::new(HashEmbedder::new(128)), docs).unwrap();
//! let hits = index.search("Age: 30, Smoker: yes", 1);
//! assert_eq!(hits[0].document.row, 0);
//! ```

pub mod document;
pub mod embed;
pub mod error;
pub mod index;
pub mod insight;
pub mod metric;
pub mod synthesize;
pub mod vector;

pub use document::Document;
pub use embed::{Embedder, HashEmbedder, DEFAULT_DIM};
pub use error::{IndexError, Result};
pub use index::{Scored, SimilarityIndex, DEFAULT_SEARCH_K};
pub use insight::{neighbor_charge, parse_charges, similar_avg_cost, INSIGHT_K};
pub use metric::Metric;
pub use synthesize::{documents, synthesize_row};
pub use vector::Vector;
