//! Per-record cost comparison from nearest neighbors.
//!
//! For a record's own text key, retrieve its k nearest documents and
//! average their charges. Extraction is fail-soft: a neighbor whose charge
//! cannot be recovered is skipped silently, and a query with no
//! recoverable charges yields 0.

use crate::document::Document;
use crate::index::SimilarityIndex;

/// Neighbor count for the per-record insight pass.
pub const INSIGHT_K: usize = 3;

const CHARGES_LABEL: &str = "Charges: ";

/// Extract the charge from a rendered `"..., Charges: <number>"` suffix.
#[must_use]
pub fn parse_charges(text: &str) -> Option<f64> {
    let (_, rest) = text.split_once(CHARGES_LABEL)?;
    rest.trim().parse::<f64>().ok()
}

/// A neighbor's charge: structured metadata when present, otherwise
/// parsed out of the rendered text.
#[must_use]
pub fn neighbor_charge(document: &Document) -> Option<f64> {
    document.charges.or_else(|| parse_charges(&document.text))
}

/// Mean charge of the k documents most similar to `text`, or 0 when none
/// of them has a recoverable charge.
#[must_use]
pub fn similar_avg_cost(index: &SimilarityIndex, text: &str, k: usize) -> f64 {
    let charges: Vec<f64> = index
        .search(text, k)
        .iter()
        .filter_map(|hit| neighbor_charge(&hit.document))
        .collect();
    if charges.is_empty() {
        return 0.0;
    }
    charges.iter().sum::<f64>() / charges.len() as f64
}
