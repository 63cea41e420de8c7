use serde::{Deserialize, Serialize};

/// A synthesized text document with a back-reference to its source row.
///
/// When the pipeline builds documents itself, the record's charge rides
/// along as structured metadata so downstream aggregation never has to
/// re-parse the rendered text. Documents ingested from a pre-existing
/// `text` column may lack it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source row index in the input frame.
    pub row: u64,
    /// The retrieval key: one rendered sentence.
    pub text: String,
    /// The record's charge, when known at synthesis time.
    pub charges: Option<f64>,
}

impl Document {
    #[inline]
    #[must_use]
    pub fn new(row: u64, text: impl Into<String>) -> Self {
        Self {
            row,
            text: text.into(),
            charges: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_charges(mut self, charges: f64) -> Self {
        self.charges = Some(charges);
        self
    }
}
