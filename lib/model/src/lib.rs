//! # medcast Model
//!
//! Regression layer for the medcast pipeline:
//!
//! - [`split`] - seeded, reproducible train/test partitioning
//! - [`linear`] - ridge-stabilised least-squares fit
//! - [`forest`] - bagged regression trees with a configurable depth/count
//! - [`metrics`] - RMSE and MAE over the held-out partition
//! - [`regressor`] - strategy parsing and the fitted-model wrapper
//!
//! All randomness (split shuffle, bootstrap sampling) flows from explicit
//! seed parameters so identical configurations reproduce identical fits.

pub mod error;
pub mod forest;
pub mod linear;
pub mod metrics;
pub mod regressor;
pub mod split;

pub use error::{ModelError, Result};
pub use forest::{ForestModel, DEFAULT_MAX_DEPTH, DEFAULT_TREES};
pub use linear::LinearModel;
pub use metrics::{mae, rmse};
pub use regressor::{Model, Strategy};
pub use split::{select, train_test_split, Split, DEFAULT_SEED, DEFAULT_TEST_FRACTION};

/// Shared shape validation for the fit entry points.
pub(crate) fn validate_design(rows: &[Vec<f64>], targets: &[f64]) -> Result<()> {
    if rows.is_empty() {
        return Err(ModelError::EmptyTrainingSet);
    }
    if rows.len() != targets.len() {
        return Err(ModelError::TargetLength {
            rows: rows.len(),
            targets: targets.len(),
        });
    }
    let width = rows[0].len();
    for row in rows {
        if row.len() != width {
            return Err(ModelError::DimensionMismatch {
                expected: width,
                actual: row.len(),
            });
        }
    }
    Ok(())
}
