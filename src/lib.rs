//! # medcast
//!
//! A batch pipeline that predicts medical insurance charges from tabular
//! records and annotates every prediction with the mean charge of the most
//! similar historical records, retrieved via text embedding and exact k-NN
//! search.
//!
//! ## Quick Start
//!
//! ```bash
//! medcast train --data insurance.csv --model random_forest
//! medcast export --data insurance.csv --output dashboard_export.csv
//! medcast query "predict medical cost for a 30 year old smoker"
//! ```
//!
//! ## Crate Structure
//!
//! - [`medcast_core`] - tabular frame model and CSV I/O
//! - [`medcast_features`] - derived columns and one-hot encoding
//! - [`medcast_model`] - seeded splits, linear/forest fits, metrics
//! - [`medcast_index`] - text synthesis, embeddings, k-NN retrieval
//!
//! This crate adds the orchestration on top: the [`pipeline`] operations
//! (train, export, query) and file-backed experiment [`tracking`].

pub mod pipeline;
pub mod tracking;

// Re-export core types
pub use medcast_core::{Frame, Value};
pub use medcast_features::{Dataset, Encoder};
pub use medcast_index::{Document, Embedder, HashEmbedder, SimilarityIndex};
pub use medcast_model::{Model, ModelError, Strategy};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::pipeline::{
        export, query, train, ExportOptions, ExportReport, TrainOptions, TrainReport,
    };
    pub use crate::tracking::{ExperimentTracker, Run};
    pub use medcast_core::{io, Frame, Value};
    pub use medcast_features::{build_feature_pipeline, Dataset, Encoder};
    pub use medcast_index::{
        documents, similar_avg_cost, Document, Embedder, HashEmbedder, SimilarityIndex,
    };
    pub use medcast_model::{
        mae, rmse, train_test_split, Model, ModelError, Strategy,
    };
}
