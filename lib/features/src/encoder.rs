//! One-hot encoding with an explicit, fitted category vocabulary.
//!
//! The vocabulary is fixed once at [`Encoder::fit`] time and carried in the
//! encoder, so the encoded feature layout cannot drift between training and
//! inference. Distinct values are sorted lexicographically and the first is
//! dropped as the reference level; its rows (and any value unseen at fit
//! time) encode as all-zero indicators.

use medcast_core::{Error, Frame, Result, Value};
use serde::{Deserialize, Serialize};

/// Categorical columns, in fixed encoding order.
pub const CATEGORICAL_COLUMNS: [&str; 5] = ["sex", "smoker", "region", "bmi_category", "age_group"];

/// Prediction target; retained separately, never a feature.
pub const TARGET_COLUMN: &str = "charges";

/// Retrieval key column; excluded from the feature set when present.
pub const TEXT_COLUMN: &str = "text";

/// Fitted vocabulary for one categorical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Dropped reference level (first in sort order).
    pub reference: String,
    /// Remaining levels, sorted; one indicator column each.
    pub retained: Vec<String>,
}

impl Vocabulary {
    fn fit(column: &[Value]) -> Option<Self> {
        let mut values: Vec<String> = column
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        values.sort();
        values.dedup();
        let mut iter = values.into_iter();
        let reference = iter.next()?;
        Some(Vocabulary {
            reference,
            retained: iter.collect(),
        })
    }
}

/// One-hot encoder over the frame's categorical columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoder {
    vocabularies: Vec<(String, Vocabulary)>,
}

/// Dense numeric design matrix plus the retained target vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub feature_names: Vec<String>,
    pub rows: Vec<Vec<f64>>,
    pub target: Vec<f64>,
}

impl Dataset {
    #[inline]
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }
}

impl Encoder {
    /// Learn one vocabulary per categorical column present in `frame`.
    /// Columns with no string values are skipped.
    #[must_use]
    pub fn fit(frame: &Frame) -> Self {
        let vocabularies = CATEGORICAL_COLUMNS
            .iter()
            .filter_map(|name| {
                let column = frame.column(name)?;
                Vocabulary::fit(column).map(|vocab| (name.to_string(), vocab))
            })
            .collect();
        Encoder { vocabularies }
    }

    /// Fitted vocabulary for a column, if one was learned.
    #[must_use]
    pub fn vocabulary(&self, column: &str) -> Option<&Vocabulary> {
        self.vocabularies
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, vocab)| vocab)
    }

    /// Encode `frame` against the fitted vocabularies.
    ///
    /// Numeric columns (everything except the categoricals, the target, and
    /// a `text` column) pass through in frame order, followed by the
    /// indicator columns in vocabulary order. The target column must exist.
    pub fn encode(&self, frame: &Frame) -> Result<Dataset> {
        let n = frame.n_rows();
        let mut feature_names = Vec::new();
        let mut columns: Vec<Vec<f64>> = Vec::new();

        for name in frame.names() {
            if CATEGORICAL_COLUMNS.contains(&name.as_str())
                || name == TARGET_COLUMN
                || name == TEXT_COLUMN
            {
                continue;
            }
            let values = frame
                .f64_column(name)
                .unwrap_or_default()
                .into_iter()
                .map(|v| v.unwrap_or(0.0))
                .collect();
            feature_names.push(name.clone());
            columns.push(values);
        }

        for (name, vocab) in &self.vocabularies {
            let column = frame.column(name);
            for level in &vocab.retained {
                feature_names.push(format!("{}_{}", name, level));
                let indicators = match column {
                    Some(cells) => cells
                        .iter()
                        .map(|cell| {
                            if cell.as_str() == Some(level.as_str()) {
                                1.0
                            } else {
                                0.0
                            }
                        })
                        .collect(),
                    // Column absent at encode time: indicators stay zero.
                    None => vec![0.0; n],
                };
                columns.push(indicators);
            }
        }

        let target = frame
            .f64_column(TARGET_COLUMN)
            .ok_or_else(|| Error::ColumnNotFound(TARGET_COLUMN.to_string()))?
            .into_iter()
            .map(|v| v.unwrap_or(0.0))
            .collect();

        let rows = (0..n)
            .map(|row| columns.iter().map(|col| col[row]).collect())
            .collect();

        Ok(Dataset {
            feature_names,
            rows,
            target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_feature_pipeline;
    use medcast_core::io;

    const SAMPLE: &str = "age,sex,bmi,children,smoker,region,charges\n\
        25,female,22,0,yes,southwest,2000\n\
        40,male,31,2,no,southeast,5000\n\
        70,male,28,0,no,northwest,9000\n";

    fn engineered() -> Frame {
        let mut frame = io::read_csv_from(SAMPLE.as_bytes()).unwrap();
        build_feature_pipeline(&mut frame).unwrap();
        frame
    }

    #[test]
    fn test_reference_level_dropped() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);

        let sex = encoder.vocabulary("sex").unwrap();
        assert_eq!(sex.reference, "female");
        assert_eq!(sex.retained, ["male"]);

        let region = encoder.vocabulary("region").unwrap();
        assert_eq!(region.reference, "northwest");
        assert_eq!(region.retained, ["southeast", "southwest"]);
    }

    #[test]
    fn test_encode_layout_and_target() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);
        let dataset = encoder.encode(&frame).unwrap();

        // Passthrough numerics first, then indicators; never charges/text.
        assert!(dataset.feature_names.contains(&"age".to_string()));
        assert!(dataset.feature_names.contains(&"is_smoker".to_string()));
        assert!(dataset.feature_names.contains(&"sex_male".to_string()));
        assert!(dataset.feature_names.contains(&"region_southwest".to_string()));
        assert!(!dataset.feature_names.contains(&"charges".to_string()));

        assert_eq!(dataset.n_rows(), 3);
        assert_eq!(dataset.target, [2000.0, 5000.0, 9000.0]);
        for row in &dataset.rows {
            assert_eq!(row.len(), dataset.n_features());
        }

        let sex_male = dataset
            .feature_names
            .iter()
            .position(|n| n == "sex_male")
            .unwrap();
        let one_hot: Vec<f64> = dataset.rows.iter().map(|r| r[sex_male]).collect();
        assert_eq!(one_hot, [0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);
        let a = encoder.encode(&frame).unwrap();
        let b = encoder.encode(&frame).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unseen_value_encodes_as_reference() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);

        let unseen =
            io::read_csv_from("age,sex,bmi,children,smoker,region,charges\n30,other,25,0,no,northeast,100\n".as_bytes())
                .unwrap();
        let dataset = encoder.encode(&unseen).unwrap();

        let sex_male = dataset
            .feature_names
            .iter()
            .position(|n| n == "sex_male")
            .unwrap();
        assert_eq!(dataset.rows[0][sex_male], 0.0);
        let se = dataset
            .feature_names
            .iter()
            .position(|n| n == "region_southeast")
            .unwrap();
        assert_eq!(dataset.rows[0][se], 0.0);
    }

    #[test]
    fn test_missing_categorical_column_encodes_zero() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);

        let partial = io::read_csv_from("age,charges\n30,100\n".as_bytes()).unwrap();
        let dataset = encoder.encode(&partial).unwrap();

        // Same layout as the fitted schema, indicators all zero.
        assert!(dataset.feature_names.contains(&"region_southwest".to_string()));
        let sw = dataset
            .feature_names
            .iter()
            .position(|n| n == "region_southwest")
            .unwrap();
        assert_eq!(dataset.rows[0][sw], 0.0);
    }

    #[test]
    fn test_missing_target_is_an_error() {
        let frame = engineered();
        let encoder = Encoder::fit(&frame);
        let no_target = io::read_csv_from("age,sex\n30,male\n".as_bytes()).unwrap();
        assert!(matches!(
            encoder.encode(&no_target),
            Err(Error::ColumnNotFound(_))
        ));
    }
}
