//! Rendering records into retrieval-key sentences.
//!
//! One line per record, labeled fields in fixed order. The rendering is
//! pure and deterministic; a frame that already carries a `text` column
//! keeps it verbatim.

use crate::document::Document;
use medcast_core::Frame;

/// Raw fields rendered into the text key, with their labels, in order.
const TEXT_FIELDS: [(&str, &str); 7] = [
    ("Age", "age"),
    ("Sex", "sex"),
    ("BMI", "bmi"),
    ("Children", "children"),
    ("Smoker", "smoker"),
    ("Region", "region"),
    ("Charges", "charges"),
];

/// Render one row as `"Age: 19, Sex: female, ..."`. Missing columns
/// render as empty values rather than failing.
#[must_use]
pub fn synthesize_row(frame: &Frame, row: usize) -> String {
    TEXT_FIELDS
        .iter()
        .map(|(label, column)| {
            let value = frame
                .value(row, column)
                .map(ToString::to_string)
                .unwrap_or_default();
            format!("{}: {}", label, value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build one [`Document`] per row.
///
/// A pre-existing `text` column is used verbatim as the retrieval key;
/// otherwise the row is synthesized. Either way the row's charge is
/// attached as metadata when it is numeric.
#[must_use]
pub fn documents(frame: &Frame) -> Vec<Document> {
    let has_text = frame.contains("text");
    (0..frame.n_rows())
        .map(|row| {
            let text = if has_text {
                frame
                    .value(row, "text")
                    .map(ToString::to_string)
                    .unwrap_or_default()
            } else {
                synthesize_row(frame, row)
            };
            let mut document = Document::new(row as u64, text);
            if let Some(charges) = frame.value(row, "charges").and_then(|v| v.as_f64()) {
                document = document.with_charges(charges);
            }
            document
        })
        .collect()
}
